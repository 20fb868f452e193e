use clap::Parser;
use web_optimizer::cli::Args;
use web_optimizer::error::OptimizeError;
use web_optimizer::{logger, optimize_assets};

fn main() {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    let result = optimize_assets(&args.assets, &args.raw_options()).and_then(|summary| {
        if summary.failed > 0 {
            Err(OptimizeError::PartialFailure(
                summary.failed,
                summary.processed + summary.failed,
            ))
        } else {
            Ok(())
        }
    });

    if let Err(e) = result {
        web_optimizer::error!("{}", e);
        std::process::exit(1);
    }
}
