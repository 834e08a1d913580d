//! Sprite atlas reconstruction
//!
//! The graphics section holds 128 lines of 128 hex digits, one digit per
//! pixel. Together they form a 128×128 sheet laid out as a 16×16 grid of
//! 8×8 sprites; sprite `id` sits at grid column `id % 16`, row `id / 16`.

use crate::cart::RawSection;
use crate::nibble::nibble_or_zero;
use crate::raster::IndexedImage;

/// Sprite width and height in pixels.
pub const TILE_SIZE: u32 = 8;
/// Sprites per atlas row and per atlas column.
pub const GRID_SIZE: u32 = 16;
/// Atlas width and height in pixels.
pub const ATLAS_SIZE: u32 = TILE_SIZE * GRID_SIZE;
/// Number of sprite IDs addressable in the atlas.
pub const SPRITE_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// 8×8 grid of color indices, `[row][column]`.
pub type SpritePixels = [[u8; TILE_SIZE as usize]; TILE_SIZE as usize];

/// Grid position `(column, row)` of a sprite ID.
pub const fn sprite_position(id: u8) -> (u32, u32) {
    (id as u32 % GRID_SIZE, id as u32 / GRID_SIZE)
}

/// Sprite ID at grid position `(column, row)`.
pub const fn sprite_id(column: u32, row: u32) -> u8 {
    (row * GRID_SIZE + column) as u8
}

/// The 128×128 indexed sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atlas {
    image: IndexedImage,
}

impl Atlas {
    /// Decode graphics lines into the atlas.
    ///
    /// Short or missing lines leave the remaining pixels at index 0; digits
    /// beyond column 127 or lines beyond row 127 are ignored; invalid digits
    /// decode to index 0.
    pub fn reconstruct(graphics: &RawSection) -> Self {
        let mut image = IndexedImage::new(ATLAS_SIZE, ATLAS_SIZE);
        for (y, line) in graphics.lines().iter().take(ATLAS_SIZE as usize).enumerate() {
            for (x, &c) in line.as_bytes().iter().take(ATLAS_SIZE as usize).enumerate() {
                image.set(x as u32, y as u32, nibble_or_zero(c));
            }
        }
        Self { image }
    }

    pub fn image(&self) -> &IndexedImage {
        &self.image
    }

    /// Pixel-space origin of a sprite's top-left corner.
    pub fn sprite_origin(id: u8) -> (u32, u32) {
        let (column, row) = sprite_position(id);
        (column * TILE_SIZE, row * TILE_SIZE)
    }

    /// Color indices of one sprite.
    pub fn sprite_pixels(&self, id: u8) -> SpritePixels {
        let (ox, oy) = Self::sprite_origin(id);
        let mut pixels = [[0u8; TILE_SIZE as usize]; TILE_SIZE as usize];
        for (y, row) in pixels.iter_mut().enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = self.image.get(ox + x as u32, oy + y as u32);
            }
        }
        pixels
    }

    /// Whether any pixel of the sprite is non-zero.
    pub fn is_sprite_used(&self, id: u8) -> bool {
        self.sprite_pixels(id).iter().flatten().any(|&px| px != 0)
    }

    /// One sprite as its own 8×8 raster.
    pub fn sprite_image(&self, id: u8) -> IndexedImage {
        let (ox, oy) = Self::sprite_origin(id);
        self.image.crop(ox, oy, TILE_SIZE, TILE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(lines: &[&str]) -> RawSection {
        RawSection::new(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_sprite_id_roundtrip() {
        for id in 0..=255u8 {
            let (x, y) = sprite_position(id);
            assert!(x < 16 && y < 16);
            assert_eq!(sprite_id(x, y), id);
            assert_eq!(y * 16 + x, id as u32);
        }
    }

    #[test]
    fn test_reconstruct_places_digits() {
        let atlas = Atlas::reconstruct(&section(&["0070", "f"]));
        assert_eq!(atlas.image().get(2, 0), 7);
        assert_eq!(atlas.image().get(0, 1), 15);
        assert_eq!(atlas.image().get(1, 1), 0);
        assert_eq!(atlas.image().width(), 128);
        assert_eq!(atlas.image().height(), 128);
    }

    #[test]
    fn test_reconstruct_invalid_digits_are_blank() {
        let atlas = Atlas::reconstruct(&section(&["zz9?"]));
        assert_eq!(atlas.image().get(0, 0), 0);
        assert_eq!(atlas.image().get(1, 0), 0);
        assert_eq!(atlas.image().get(2, 0), 9);
        assert_eq!(atlas.image().get(3, 0), 0);
    }

    #[test]
    fn test_reconstruct_is_idempotent() {
        let lines = section(&["0123456789abcdef", "fedcba9876543210"]);
        assert_eq!(Atlas::reconstruct(&lines), Atlas::reconstruct(&lines));
    }

    #[test]
    fn test_reconstruct_ignores_overflow() {
        let long = "1".repeat(200);
        let lines: Vec<&str> = std::iter::repeat(long.as_str()).take(140).collect();
        let atlas = Atlas::reconstruct(&section(&lines));
        assert!(atlas.image().indices().iter().all(|&i| i == 1));
    }

    #[test]
    fn test_sprite_pixels_and_used() {
        // Sprite 17 sits at grid (1, 1): pixels (8..16, 8..16)
        let mut lines = vec!["0".repeat(128); 16];
        lines[9] = format!("{}{}", "0".repeat(10), "c");
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let atlas = Atlas::reconstruct(&section(&refs));

        let pixels = atlas.sprite_pixels(17);
        assert_eq!(pixels[1][2], 12);
        assert!(atlas.is_sprite_used(17));
        assert!(!atlas.is_sprite_used(16));
        assert!(!atlas.is_sprite_used(0));

        let img = atlas.sprite_image(17);
        assert_eq!(img.get(2, 1), 12);
    }
}
