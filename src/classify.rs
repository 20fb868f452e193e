//! Asset classification: partition input paths into per-kind buckets.

use crate::constants::AssetKind;
use crate::error::{OptimizeError, Result};
use crate::utils::file_extension;
use std::path::{Path, PathBuf};

/// Input paths partitioned by asset kind. Populated once per run and not
/// mutated afterwards; each path's extension maps to exactly one bucket.
#[derive(Debug, Default, Clone)]
pub struct AssetBuckets {
    pub image: Vec<PathBuf>,
    pub svg: Vec<PathBuf>,
    pub video: Vec<PathBuf>,
}

impl AssetBuckets {
    pub fn total(&self) -> usize {
        self.image.len() + self.svg.len() + self.video.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Determine the asset kind for a single path.
///
/// Checks readability first, then extracts the extension and looks it up in
/// the authoritative extension table.
pub fn classify_path(path: &Path) -> Result<AssetKind> {
    if !path.is_file() {
        return Err(OptimizeError::FileNotFound(path.to_path_buf()));
    }

    let ext = file_extension(path)?;
    AssetKind::from_extension(&ext).ok_or_else(|| OptimizeError::UnsupportedAsset(path.to_path_buf()))
}

/// Partition paths into buckets, preserving input order within each bucket.
///
/// Paths that are missing, unreadable, extensionless, or of an unsupported
/// kind are skipped with a warning; classification never aborts the run.
pub fn classify_assets(paths: &[PathBuf]) -> AssetBuckets {
    let mut buckets = AssetBuckets::default();

    for path in paths {
        match classify_path(path) {
            Ok(kind) => {
                crate::verbose!("{} classified as {}", path.display(), kind.name());
                match kind {
                    AssetKind::Image => buckets.image.push(path.clone()),
                    AssetKind::Svg => buckets.svg.push(path.clone()),
                    AssetKind::Video => buckets.video.push(path.clone()),
                }
            }
            Err(e) => {
                crate::warn!("Skipping {}: {}", path.display(), e);
            }
        }
    }

    buckets
}
