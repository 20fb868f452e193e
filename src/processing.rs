//! Image variant generation: plan the output files for a source image and
//! perform the encodes.

use crate::constants::{
    OutputFormat, BACKUP_SUFFIX, DENSITY_SCALE, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL,
    ZOPFLI_ITERATIONS,
};
use crate::error::{OptimizeError, Result};
use crate::flags::{Descriptor, ImageOptions};
use crate::utils::{file_extension, file_stem, format_file_size};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageReader};
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::borrow::Cow;
use std::fs;
use std::io::BufWriter;
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};

/// One output file to produce for a source image. Derived per asset and
/// consumed within a single loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputVariant {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Target width for a `w`-keyed variant; `None` keeps natural size.
    pub width: Option<u32>,
    /// Uniform scale factor for a density-keyed variant.
    pub scale: Option<u32>,
    pub format: OutputFormat,
    pub quality: u8,
}

/// Compute the set of output variants for one source image.
///
/// Always includes the base re-encode at natural size. With the width
/// descriptor, adds one variant per requested size strictly smaller than the
/// source width (no upscaling). With the density descriptor, adds exactly one
/// 2x variant regardless of sizes.
pub fn plan_variants(
    source: &Path,
    natural_width: u32,
    options: &ImageOptions,
) -> Result<Vec<OutputVariant>> {
    let stem = file_stem(source)?;
    let ext = options.format.extension();
    let out_dir = output_dir(source, options);

    let variant = |file_name: String, width: Option<u32>, scale: Option<u32>| OutputVariant {
        source: source.to_path_buf(),
        output: out_dir.join(file_name),
        width,
        scale,
        format: options.format,
        quality: options.quality,
    };

    let mut variants = vec![variant(format!("{}.{}", stem, ext), None, None)];

    match options.descriptor {
        Descriptor::Width => {
            for &size in &options.sizes {
                if natural_width > size {
                    variants.push(variant(format!("{}-{}w.{}", stem, size, ext), Some(size), None));
                }
            }
        }
        Descriptor::Density => {
            variants.push(variant(
                format!("{}@{}x.{}", stem, DENSITY_SCALE, ext),
                None,
                Some(DENSITY_SCALE),
            ));
        }
    }

    Ok(variants)
}

fn output_dir(source: &Path, options: &ImageOptions) -> PathBuf {
    options
        .output
        .clone()
        .unwrap_or_else(|| source.parent().map(Path::to_path_buf).unwrap_or_default())
}

/// Load a source image along with its on-disk size.
pub fn load_image(input: &Path) -> Result<(DynamicImage, u64)> {
    if !input.is_file() {
        return Err(OptimizeError::FileNotFound(input.to_path_buf()));
    }

    let file_size = fs::metadata(input)?.len();
    let img = ImageReader::open(input)?.decode()?;
    Ok((img, file_size))
}

/// Process one classified image: plan its variants, take a backup if the base
/// output would overwrite the source, then render and encode every variant.
///
/// Returns the number of files written.
pub fn optimize_image(input: &Path, options: &ImageOptions) -> Result<usize> {
    let (img, original_size) = load_image(input)?;
    let variants = plan_variants(input, img.width(), options)?;

    // The backup copy must be durably on disk before the overwrite is issued.
    if variants.iter().any(|v| v.output == *input) {
        let backup = backup_path(input)?;
        fs::copy(input, &backup)?;
        crate::verbose!("Backed up {} to {}", input.display(), backup.display());
    }

    for variant in &variants {
        if let Some(parent) = variant.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|_| OptimizeError::DirectoryCreationFailed(parent.to_path_buf()))?;
            }
        }

        let rendered = render_variant(&img, variant);
        save_image(&rendered, &variant.output, variant.format, variant.quality)?;
        crate::verbose!(
            "Wrote {} ({}x{})",
            variant.output.display(),
            rendered.width(),
            rendered.height()
        );
    }

    crate::success!(
        "{} ({}) -> {} file(s)",
        input.display(),
        format_file_size(original_size),
        variants.len()
    );

    Ok(variants.len())
}

/// Backup file name for a source about to be overwritten:
/// `photo.png` -> `photo.bak.png`, next to the source.
pub fn backup_path(source: &Path) -> Result<PathBuf> {
    let stem = file_stem(source)?;
    let ext = file_extension(source)?;
    Ok(source.with_file_name(format!("{}.{}.{}", stem, BACKUP_SUFFIX, ext)))
}

/// Produce the pixel data for a variant, borrowing the source image when no
/// resampling is needed.
fn render_variant<'a>(img: &'a DynamicImage, variant: &OutputVariant) -> Cow<'a, DynamicImage> {
    if let Some(width) = variant.width {
        let height = scaled_height(img.dimensions(), width);
        Cow::Owned(img.resize_exact(width, height, image::imageops::FilterType::Lanczos3))
    } else if let Some(scale) = variant.scale {
        Cow::Owned(img.resize_exact(
            img.width() * scale,
            img.height() * scale,
            image::imageops::FilterType::Lanczos3,
        ))
    } else {
        Cow::Borrowed(img)
    }
}

/// Height that preserves the source aspect ratio at the given target width.
pub fn scaled_height((natural_width, natural_height): (u32, u32), target_width: u32) -> u32 {
    (((natural_height as u64) * (target_width as u64)) / (natural_width as u64).max(1)).max(1) as u32
}

/// Encode an image to disk in the requested format.
pub fn save_image(
    img: &DynamicImage,
    output: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<()> {
    match format {
        OutputFormat::Jpeg => {
            let file = fs::File::create(output)?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
            img.write_with_encoder(encoder)?;
        }
        OutputFormat::Png => {
            let temp_path = output.with_extension("temp.png");
            img.save_with_format(&temp_path, image::ImageFormat::Png)?;

            struct TempFileGuard(PathBuf);
            impl Drop for TempFileGuard {
                fn drop(&mut self) {
                    let _ = fs::remove_file(&self.0);
                }
            }
            let _guard = TempFileGuard(temp_path.clone());

            let mut oxipng_options = Options::from_preset(4);
            oxipng_options.force = true;

            if quality >= 90 {
                oxipng_options.deflate = Deflaters::Zopfli {
                    iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
                };
            } else if quality >= 70 {
                oxipng_options.deflate = Deflaters::Libdeflater {
                    compression: LIBDEFLATER_HIGH_LEVEL,
                };
            } else {
                oxipng_options.deflate = Deflaters::Libdeflater {
                    compression: LIBDEFLATER_LOW_LEVEL,
                };
            }

            let in_file = InFile::Path(temp_path.clone());
            let out_file = OutFile::Path {
                path: Some(output.to_path_buf()),
                preserve_attrs: false,
            };
            oxipng::optimize(&in_file, &out_file, &oxipng_options)
                .map_err(|e| OptimizeError::PngOptimization(e.to_string()))?;
        }
        OutputFormat::WebP => {
            // image's WebP encoder is lossless; quality does not apply
            img.save_with_format(output, image::ImageFormat::WebP)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEVICE_SIZES;

    fn options(descriptor: Descriptor, sizes: Vec<u32>, format: OutputFormat) -> ImageOptions {
        ImageOptions {
            quality: 75,
            descriptor,
            sizes,
            format,
            output: None,
        }
    }

    #[test]
    fn test_plan_variants_width_descriptor_skips_upscales() {
        let opts = options(Descriptor::Width, vec![640, 1080, 1920], OutputFormat::Png);
        let variants = plan_variants(Path::new("photo.png"), 1200, &opts).unwrap();

        let names: Vec<_> = variants
            .iter()
            .map(|v| v.output.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["photo.png", "photo-640w.png", "photo-1080w.png"]);
        assert_eq!(variants[1].width, Some(640));
        assert_eq!(variants[2].width, Some(1080));
    }

    #[test]
    fn test_plan_variants_no_variant_at_or_above_natural_width() {
        let opts = options(Descriptor::Width, vec![1200, 1920], OutputFormat::Png);
        let variants = plan_variants(Path::new("photo.png"), 1200, &opts).unwrap();
        // 1200 is not strictly smaller than the source width
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].width, None);
    }

    #[test]
    fn test_plan_variants_density_descriptor_ignores_sizes() {
        let opts = options(Descriptor::Density, DEVICE_SIZES.to_vec(), OutputFormat::WebP);
        let variants = plan_variants(Path::new("photo.png"), 100, &opts).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(
            variants[1].output.file_name().unwrap().to_str().unwrap(),
            "photo@2x.webp"
        );
        assert_eq!(variants[1].scale, Some(2));
        assert_eq!(variants[1].width, None);
    }

    #[test]
    fn test_plan_variants_uses_normalized_format_extension() {
        let opts = options(Descriptor::Width, vec![], OutputFormat::Jpeg);
        let variants = plan_variants(Path::new("dir/photo.png"), 100, &opts).unwrap();
        assert_eq!(variants[0].output, PathBuf::from("dir/photo.jpeg"));
    }

    #[test]
    fn test_plan_variants_respects_output_dir() {
        let mut opts = options(Descriptor::Width, vec![64], OutputFormat::Png);
        opts.output = Some(PathBuf::from("out"));
        let variants = plan_variants(Path::new("assets/photo.png"), 100, &opts).unwrap();
        assert_eq!(variants[0].output, PathBuf::from("out/photo.png"));
        assert_eq!(variants[1].output, PathBuf::from("out/photo-64w.png"));
    }

    #[test]
    fn test_base_variant_overwrites_source_without_output_dir() {
        let opts = options(Descriptor::Width, vec![], OutputFormat::Png);
        let variants = plan_variants(Path::new("photo.png"), 100, &opts).unwrap();
        assert_eq!(variants[0].output, PathBuf::from("photo.png"));
    }

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("assets/photo.png")).unwrap(),
            PathBuf::from("assets/photo.bak.png")
        );
    }

    #[test]
    fn test_scaled_height_preserves_aspect_ratio() {
        assert_eq!(scaled_height((2000, 1000), 500), 250);
        assert_eq!(scaled_height((100, 100), 50), 50);
        assert_eq!(scaled_height((3000, 2000), 640), 426);
        // never collapses to zero
        assert_eq!(scaled_height((4000, 1), 10), 1);
    }

    #[test]
    fn test_render_variant_width() {
        let img = DynamicImage::new_rgb8(200, 100);
        let opts = options(Descriptor::Width, vec![100], OutputFormat::Png);
        let variants = plan_variants(Path::new("a.png"), 200, &opts).unwrap();
        let rendered = render_variant(&img, &variants[1]);
        assert_eq!(rendered.dimensions(), (100, 50));
    }

    #[test]
    fn test_render_variant_density_doubles_both_dimensions() {
        let img = DynamicImage::new_rgb8(100, 100);
        let opts = options(Descriptor::Density, vec![], OutputFormat::Png);
        let variants = plan_variants(Path::new("a.png"), 100, &opts).unwrap();
        let rendered = render_variant(&img, &variants[1]);
        assert_eq!(rendered.dimensions(), (200, 200));
    }

    #[test]
    fn test_render_variant_base_borrows_source() {
        let img = DynamicImage::new_rgb8(100, 100);
        let opts = options(Descriptor::Width, vec![], OutputFormat::Png);
        let variants = plan_variants(Path::new("a.png"), 100, &opts).unwrap();
        assert!(matches!(render_variant(&img, &variants[0]), Cow::Borrowed(_)));
    }

    #[test]
    fn test_load_image_not_found() {
        let result = load_image(Path::new("nonexistent.jpg"));
        assert!(matches!(result, Err(OptimizeError::FileNotFound(_))));
    }
}
