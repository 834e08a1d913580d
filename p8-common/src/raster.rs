//! In-memory raster buffers
//!
//! Cartridge graphics are palette-indexed; they stay indexed until they are
//! handed to an encoder, at which point they resolve to RGBA8 through
//! [`PALETTE`](crate::palette::PALETTE).

use crate::palette::{self, Rgba};

/// Palette-indexed raster, one byte per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl IndexedImage {
    /// Create a raster filled with color index 0.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            indices: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Color index at `(x, y)`, or 0 outside the raster.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.offset(x, y).map_or(0, |i| self.indices[i])
    }

    /// Set the color index at `(x, y)`. Writes outside the raster are dropped.
    pub fn set(&mut self, x: u32, y: u32, index: u8) {
        if let Some(i) = self.offset(x, y) {
            self.indices[i] = index;
        }
    }

    /// Fill a rectangle with one color index, clipped to the raster.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, index: u8) {
        for yy in y..y.saturating_add(height).min(self.height) {
            for xx in x..x.saturating_add(width).min(self.width) {
                self.set(xx, yy, index);
            }
        }
    }

    /// Copy a `(width, height)` block from `src` at `from` to `to` in `self`.
    ///
    /// Source pixels outside `src` read as index 0; destination pixels
    /// outside `self` are dropped.
    pub fn blit(
        &mut self,
        src: &IndexedImage,
        from: (u32, u32),
        to: (u32, u32),
        (width, height): (u32, u32),
    ) {
        let (sx, sy) = from;
        let (dx, dy) = to;
        for yy in 0..height {
            for xx in 0..width {
                self.set(dx + xx, dy + yy, src.get(sx + xx, sy + yy));
            }
        }
    }

    /// Extract a sub-raster.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> IndexedImage {
        let mut out = IndexedImage::new(width, height);
        out.blit(self, (x, y), (0, 0), (width, height));
        out
    }

    /// Resolve every index through the palette.
    pub fn to_rgba(&self) -> RgbaImageData {
        let mut data = Vec::with_capacity(self.indices.len() * 4);
        for &index in &self.indices {
            data.extend_from_slice(&palette::color(index).to_array());
        }
        RgbaImageData {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// RGBA8 raster, 4 bytes per pixel, row-major. Layout matches what PNG
/// encoders take as raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImageData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaImageData {
    /// Create a fully transparent raster.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::TRANSPARENT;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Copy all of `src` into `self` with its top-left corner at `(dx, dy)`,
    /// clipped to `self`.
    pub fn paste(&mut self, src: &RgbaImageData, dx: u32, dy: u32) {
        if dx >= self.width {
            return;
        }
        let w = self.width as usize;
        let src_w = src.width as usize;
        for y in 0..src.height {
            let ty = dy + y;
            if ty >= self.height {
                break;
            }
            let copy = src_w.min(w.saturating_sub(dx as usize));
            let src_start = y as usize * src_w * 4;
            let dst_start = (ty as usize * w + dx as usize) * 4;
            self.data[dst_start..dst_start + copy * 4]
                .copy_from_slice(&src.data[src_start..src_start + copy * 4]);
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE;

    #[test]
    fn test_out_of_bounds_access() {
        let mut img = IndexedImage::new(4, 4);
        img.set(4, 0, 9);
        img.set(0, 4, 9);
        assert!(img.indices().iter().all(|&i| i == 0));
        assert_eq!(img.get(100, 100), 0);
    }

    #[test]
    fn test_blit_and_crop() {
        let mut src = IndexedImage::new(16, 16);
        src.fill_rect(8, 8, 8, 8, 5);

        let mut dst = IndexedImage::new(8, 8);
        dst.blit(&src, (8, 8), (0, 0), (8, 8));
        assert!(dst.indices().iter().all(|&i| i == 5));

        let tile = src.crop(0, 8, 8, 8);
        assert!(tile.indices().iter().all(|&i| i == 0));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut img = IndexedImage::new(4, 4);
        img.fill_rect(2, 2, 10, 10, 3);
        assert_eq!(img.get(3, 3), 3);
        assert_eq!(img.get(1, 1), 0);
    }

    #[test]
    fn test_to_rgba_resolves_palette() {
        let mut img = IndexedImage::new(2, 1);
        img.set(1, 0, 8);
        let rgba = img.to_rgba();
        assert_eq!(rgba.data.len(), 8);
        assert_eq!(rgba.pixel(0, 0), PALETTE[0]);
        assert_eq!(rgba.pixel(1, 0), PALETTE[8]);
    }

    #[test]
    fn test_paste_into_transparent() {
        let mut sheet = RgbaImageData::transparent(4, 4);
        let mut block = IndexedImage::new(4, 2);
        block.fill_rect(0, 0, 4, 2, 7);
        sheet.paste(&block.to_rgba(), 0, 2);

        assert_eq!(sheet.pixel(0, 0), Rgba::TRANSPARENT);
        assert_eq!(sheet.pixel(3, 3), PALETTE[7]);
    }
}
