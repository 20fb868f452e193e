use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a real decodable PNG with the given dimensions.
pub fn create_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::new_rgb8(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

/// Write a small SVG with a comment, title, and metadata to minify away.
pub fn create_svg(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(
        &path,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!-- generated by an editor -->\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\n\
           <title>fixture</title>\n\
           <metadata>fixture metadata</metadata>\n\
           <path fill-rule=\"evenodd\" d=\"M0 0h24v24H0z\"/>\n\
         </svg>\n",
    )
    .unwrap();
    path
}
