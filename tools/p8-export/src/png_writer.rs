//! PNG encoding of decoded rasters

use anyhow::{Context, Result};
use image::RgbaImage;
use p8_common::{IndexedImage, RgbaImageData};
use std::path::Path;

/// Wrap an RGBA8 raster in an `image` buffer.
pub fn to_rgba_image(raster: RgbaImageData) -> Result<RgbaImage> {
    let (width, height) = (raster.width, raster.height);
    RgbaImage::from_raw(width, height, raster.into_raw())
        .with_context(|| format!("Raster buffer does not match {}x{}", width, height))
}

/// Encode an RGBA8 raster as PNG, creating parent directories as needed.
pub fn save_rgba(raster: RgbaImageData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let image = to_rgba_image(raster)?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG: {:?}", path))?;
    Ok(())
}

/// Resolve an indexed raster through the palette and encode it as PNG.
pub fn save_indexed(raster: &IndexedImage, path: &Path) -> Result<()> {
    save_rgba(raster.to_rgba(), path)
}
