use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File has no extension: {0}")]
    MissingExtension(PathBuf),

    #[error("Unsupported asset type: {0}")]
    UnsupportedAsset(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Invalid component name derived from: {0}")]
    InvalidComponentName(PathBuf),

    #[error("{0} of {1} asset(s) failed to optimize")]
    PartialFailure(usize, usize),
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
