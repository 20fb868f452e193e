pub const DEFAULT_QUALITY: u8 = 75;
pub const MIN_QUALITY: i64 = 0;
pub const MAX_QUALITY: i64 = 100;

pub const DEFAULT_CRF: u8 = 23;
pub const MIN_CRF: i64 = 0;
pub const MAX_CRF: i64 = 51;

/// Default width table for `w`-descriptor variants, matching the device
/// breakpoints commonly used for responsive `srcset` attributes.
pub const DEVICE_SIZES: [u32; 8] = [640, 750, 828, 1080, 1200, 1920, 2048, 3840];

/// Pixel density applied for `x`-descriptor variants.
pub const DENSITY_SCALE: u32 = 2;

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const BACKUP_SUFFIX: &str = "bak";
pub const OPTIMIZED_SVG_SUFFIX: &str = "optimized.svg";

/// The kind of asset a file extension maps to. Each extension belongs to
/// exactly one kind, so a file can never land in more than one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Svg,
    Video,
}

impl AssetKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" => Some(AssetKind::Image),
            "svg" => Some(AssetKind::Svg),
            "mp4" | "webm" => Some(AssetKind::Video),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Svg => "svg",
            AssetKind::Video => "video",
        }
    }
}

/// Target encoding for image outputs. `jpg` is an alias for `jpeg` and is
/// normalized away at parse time so both spell identical outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Jpeg,
    #[default]
    Png,
    WebP,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "png" => Some(OutputFormat::Png),
            "webp" => Some(OutputFormat::WebP),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::WebP => image::ImageFormat::WebP,
        }
    }
}
