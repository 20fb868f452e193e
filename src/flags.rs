//! Flag resolution: turn raw CLI option values into validated per-asset-type
//! option structs.
//!
//! Every field is validated and defaulted as an independent rule, so one
//! invalid flag never masks the diagnostics for another. Invalid values log
//! a warning and fall back to the field's default; resolution never aborts
//! the run and never clamps a value into range.

use crate::classify::AssetBuckets;
use crate::constants::{
    OutputFormat, DEFAULT_CRF, DEFAULT_QUALITY, DEVICE_SIZES, MAX_CRF, MAX_QUALITY, MIN_CRF,
    MIN_QUALITY,
};
use std::path::PathBuf;

/// Raw option values as handed over by the argument parser.
#[derive(Debug, Default, Clone)]
pub struct RawOptions {
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub sizes: Option<Vec<i64>>,
    pub descriptor: Option<String>,
    pub quality: Option<i64>,
    pub jsx: bool,
    pub crf: Option<i64>,
}

/// How resized image variants are keyed in the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Descriptor {
    /// Width-keyed: one variant per size smaller than the source width.
    #[default]
    Width,
    /// Density-keyed: a single 2x variant.
    Density,
}

impl Descriptor {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" => Some(Descriptor::Width),
            "x" => Some(Descriptor::Density),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageOptions {
    pub quality: u8,
    pub descriptor: Descriptor,
    pub sizes: Vec<u32>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub jsx: bool,
    pub output: Option<PathBuf>,
}

/// Parsed for forward compatibility; video processing is not implemented.
#[derive(Debug, Clone)]
pub struct VideoOptions {
    pub crf: u8,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub image: ImageOptions,
    pub svg: SvgOptions,
    pub video: VideoOptions,
}

/// Resolve raw CLI values into one option struct per asset type.
///
/// The buckets are only consulted to decide whether advisory "using default"
/// lines are worth printing for that asset type; the structs themselves are
/// always built.
pub fn resolve_options(raw: &RawOptions, buckets: &AssetBuckets) -> ResolvedOptions {
    if raw.output.is_none() && !buckets.is_empty() {
        crate::info!("No output directory specified, writing next to each source file.");
    }

    ResolvedOptions {
        image: resolve_image_options(raw, !buckets.image.is_empty()),
        svg: resolve_svg_options(raw),
        video: resolve_video_options(raw, !buckets.video.is_empty()),
    }
}

fn resolve_image_options(raw: &RawOptions, present: bool) -> ImageOptions {
    let quality = resolve_quality(raw.quality, present);
    let descriptor = resolve_descriptor(raw.descriptor.as_deref(), present);
    let sizes = resolve_sizes(raw.sizes.as_deref(), present);
    let format = resolve_format(raw.format.as_deref(), present);

    ImageOptions {
        quality,
        descriptor,
        sizes,
        format,
        output: raw.output.clone(),
    }
}

fn resolve_quality(quality: Option<i64>, present: bool) -> u8 {
    match quality {
        None => {
            if present {
                crate::info!("No quality flag set, using default value of {}.", DEFAULT_QUALITY);
            }
            DEFAULT_QUALITY
        }
        Some(q) if (MIN_QUALITY..=MAX_QUALITY).contains(&q) => q as u8,
        Some(q) => {
            crate::warn!(
                "Quality {} is outside {}-{}, using default value of {}.",
                q,
                MIN_QUALITY,
                MAX_QUALITY,
                DEFAULT_QUALITY
            );
            DEFAULT_QUALITY
        }
    }
}

fn resolve_descriptor(descriptor: Option<&str>, present: bool) -> Descriptor {
    match descriptor {
        None => {
            if present {
                crate::info!("No descriptor flag set, using width descriptor.");
            }
            Descriptor::default()
        }
        Some(d) => Descriptor::from_name(d).unwrap_or_else(|| {
            crate::warn!("Descriptor {:?} is not \"w\" or \"x\", using width descriptor.", d);
            Descriptor::default()
        }),
    }
}

fn resolve_sizes(sizes: Option<&[i64]>, present: bool) -> Vec<u32> {
    match sizes {
        None => {
            if present {
                crate::info!("No sizes flag set, using default device sizes {:?}.", DEVICE_SIZES);
            }
            DEVICE_SIZES.to_vec()
        }
        Some(raw_sizes) => {
            let valid: Vec<u32> = raw_sizes
                .iter()
                .filter_map(|&s| {
                    if s > 0 && s <= u32::MAX as i64 {
                        Some(s as u32)
                    } else {
                        crate::warn!("Size {} is not a positive integer, ignoring it.", s);
                        None
                    }
                })
                .collect();

            if valid.is_empty() {
                crate::warn!("No usable sizes given, using default device sizes {:?}.", DEVICE_SIZES);
                DEVICE_SIZES.to_vec()
            } else {
                valid
            }
        }
    }
}

fn resolve_format(format: Option<&str>, present: bool) -> OutputFormat {
    match format {
        None => {
            if present {
                crate::info!(
                    "No format flag set, using default value of \"{}\".",
                    OutputFormat::default().extension()
                );
            }
            OutputFormat::default()
        }
        Some(f) => OutputFormat::from_name(f).unwrap_or_else(|| {
            crate::warn!(
                "Format {:?} is not supported (png, jpeg, jpg, webp), using \"{}\".",
                f,
                OutputFormat::default().extension()
            );
            OutputFormat::default()
        }),
    }
}

fn resolve_svg_options(raw: &RawOptions) -> SvgOptions {
    SvgOptions {
        jsx: raw.jsx,
        output: raw.output.clone(),
    }
}

fn resolve_video_options(raw: &RawOptions, present: bool) -> VideoOptions {
    let crf = match raw.crf {
        None => {
            if present {
                crate::info!("No crf flag set, using default value of {}.", DEFAULT_CRF);
            }
            DEFAULT_CRF
        }
        Some(c) if (MIN_CRF..=MAX_CRF).contains(&c) => c as u8,
        Some(c) => {
            crate::warn!(
                "CRF {} is outside {}-{}, using default value of {}.",
                c,
                MIN_CRF,
                MAX_CRF,
                DEFAULT_CRF
            );
            DEFAULT_CRF
        }
    };

    VideoOptions {
        crf,
        output: raw.output.clone(),
    }
}
