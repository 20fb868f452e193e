//! Helper functions shared across the pipeline stages.

use crate::error::{OptimizeError, Result};
use std::path::Path;

/// Extract the text after the final `.` of a file name.
///
/// Dotless names and names ending in a `.` have no extension and fail with
/// `MissingExtension`, which classification reports as a skip.
pub fn file_extension(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_string())
        .ok_or_else(|| OptimizeError::MissingExtension(path.to_path_buf()))
}

/// The file name without its extension.
pub fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
        .ok_or_else(|| OptimizeError::MissingExtension(path.to_path_buf()))
}

/// Format file size in human-readable form (e.g. "1.2 MB", "512 B").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("a.png")).unwrap(), "png");
        assert_eq!(file_extension(Path::new("dir/a.b.SVG")).unwrap(), "SVG");
        assert!(matches!(
            file_extension(Path::new("noext")),
            Err(OptimizeError::MissingExtension(_))
        ));
        assert!(matches!(
            file_extension(Path::new(".gitignore")),
            Err(OptimizeError::MissingExtension(_))
        ));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("photo.png")).unwrap(), "photo");
        assert_eq!(file_stem(Path::new("dir/my-icon.svg")).unwrap(), "my-icon");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
    }
}
