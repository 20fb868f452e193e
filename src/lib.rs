pub mod classify;
pub mod cli;
pub mod constants;
pub mod error;
pub mod flags;
pub mod jsx;
pub mod logger;
pub mod optimize;
pub mod processing;
pub mod svg;
pub mod utils;

pub use classify::{classify_assets, classify_path, AssetBuckets};
pub use constants::{AssetKind, OutputFormat, DEVICE_SIZES};
pub use error::{OptimizeError, Result};
pub use flags::{
    resolve_options, Descriptor, ImageOptions, RawOptions, ResolvedOptions, SvgOptions,
    VideoOptions,
};
pub use jsx::{component_name, render_component};
pub use optimize::{optimize_assets, RunSummary};
pub use processing::{optimize_image, plan_variants, OutputVariant};
pub use svg::{minify_svg, optimize_svg_file, SvgMinifyOptions};
