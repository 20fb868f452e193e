use std::sync::atomic::{AtomicBool, Ordering};

pub use owo_colors::OwoColorize;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose_mode(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            use $crate::logger::OwoColorize;
            println!("{}", format!($($arg)*).cyan());
        }
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            use $crate::logger::OwoColorize;
            println!("{}", format!($($arg)*).green());
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            use $crate::logger::OwoColorize;
            eprintln!("{}", format!($($arg)*).yellow());
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use $crate::logger::OwoColorize;
        eprintln!("{}", format!($($arg)*).red());
    }};
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() && !$crate::logger::is_quiet() {
            println!("{}", format!($($arg)*));
        }
    };
}
