use crate::flags::RawOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "web-optimizer",
    about = "A CLI for optimizing web assets",
    long_about = "web-optimizer is a single-shot batch optimizer for web assets. It classifies \
                  the given files by extension, re-encodes and resizes images into srcset-ready \
                  variants, minifies SVGs, and can emit typed component wrappers for them.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    web-optimizer hero.png banner.jpg -f webp -q 80\n  \
    web-optimizer photo.png -o ./public -s 640 1080 1920\n  \
    web-optimizer photo.png -d x -f jpeg\n  \
    web-optimizer icons/*.svg --jsx -o ./src/components"
)]
pub struct Args {
    #[arg(help = "A space separated list of asset files to optimize")]
    pub assets: Vec<PathBuf>,

    #[arg(
        short,
        long,
        help = "Directory to write the output files to",
        long_help = "Directory to write the output files to. If unset, outputs are written \
                     next to each source file, and the original is backed up before it would \
                     be overwritten."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Output image format (png, jpeg, jpg, webp; default: png)"
    )]
    pub format: Option<String>,

    #[arg(
        short,
        long,
        num_args = 1..,
        help = "Widths to resize images to for the w descriptor",
        long_help = "Space separated list of pixel widths for width-keyed variants. \
                     Sizes not smaller than the source width are skipped (no upscaling). \
                     Defaults to the built-in device size table."
    )]
    pub sizes: Option<Vec<i64>>,

    #[arg(
        short,
        long,
        help = "Variant descriptor: w (width-keyed) or x (density-keyed, one 2x variant)"
    )]
    pub descriptor: Option<String>,

    #[arg(short, long, help = "Encode quality (0-100, default: 75)")]
    pub quality: Option<i64>,

    #[arg(long, help = "Emit a typed component wrapper for each SVG")]
    pub jsx: bool,

    #[arg(long, help = "Constant Rate Factor for video (reserved, default: 23)")]
    pub crf: Option<i64>,

    #[arg(long, help = "Suppress informational output")]
    pub quiet: bool,

    #[arg(short, long, help = "Print every file as it is written")]
    pub verbose: bool,
}

impl Args {
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            output: self.output.clone(),
            format: self.format.clone(),
            sizes: self.sizes.clone(),
            descriptor: self.descriptor.clone(),
            quality: self.quality,
            jsx: self.jsx,
            crf: self.crf,
        }
    }
}
