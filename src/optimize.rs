//! Run orchestration: classify -> resolve flags -> generate variants.
//!
//! Strictly sequential, one pass over the inputs, no state carried between
//! runs. A failing asset is logged and counted; it never stops the loop.

use crate::classify::classify_assets;
use crate::error::Result;
use crate::flags::{resolve_options, RawOptions};
use crate::logger;
use crate::processing::optimize_image;
use crate::svg::optimize_svg_file;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Outcome of one invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Assets optimized successfully.
    pub processed: usize,
    /// Inputs skipped during classification (missing, unsupported, or video).
    pub skipped: usize,
    /// Assets that failed during processing.
    pub failed: usize,
    /// Total output files written.
    pub outputs: usize,
}

fn asset_progress(total: u64) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total);
    pb.set_style(ProgressStyle::default_bar());
    pb
}

/// Optimize a list of asset paths with the given raw CLI options.
pub fn optimize_assets(paths: &[PathBuf], raw: &RawOptions) -> Result<RunSummary> {
    if paths.is_empty() {
        crate::warn!("No assets given, nothing to do.");
        return Ok(RunSummary::default());
    }

    let buckets = classify_assets(paths);
    let mut summary = RunSummary {
        skipped: paths.len() - buckets.total(),
        ..RunSummary::default()
    };

    if buckets.is_empty() {
        crate::warn!("None of the given paths are supported assets.");
        return Ok(summary);
    }

    let options = resolve_options(raw, &buckets);

    if !buckets.video.is_empty() {
        crate::warn!(
            "Video optimization is not implemented yet, skipping {} file(s).",
            buckets.video.len()
        );
        summary.skipped += buckets.video.len();
    }

    let progress = asset_progress((buckets.image.len() + buckets.svg.len()) as u64);

    for path in &buckets.image {
        match optimize_image(path, &options.image) {
            Ok(written) => {
                summary.processed += 1;
                summary.outputs += written;
            }
            Err(e) => {
                summary.failed += 1;
                crate::error!("Failed to optimize {}: {}", path.display(), e);
            }
        }
        progress.inc(1);
    }

    for path in &buckets.svg {
        match optimize_svg_file(path, &options.svg) {
            Ok(written) => {
                summary.processed += 1;
                summary.outputs += written;
            }
            Err(e) => {
                summary.failed += 1;
                crate::error!("Failed to optimize {}: {}", path.display(), e);
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();

    crate::info!(
        "Done: {} asset(s) optimized, {} file(s) written, {} skipped, {} failed.",
        summary.processed,
        summary.outputs,
        summary.skipped,
        summary.failed
    );

    Ok(summary)
}
