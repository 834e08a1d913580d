//! Sprite sheet bands and the composite export sheet
//!
//! The atlas splits into four 128×32 bands (sprite rows 0-3, 4-7, 8-11,
//! 12-15). Bands 2 and 3 are the dual-purpose bands; when one is read as map
//! data it drops out of the sheet and the remaining sprite bands are stacked
//! from the top, with transparent padding below so the sheet stays 128×128.

use crate::atlas::{Atlas, ATLAS_SIZE};
use crate::dual_purpose::{DualPurposeBand, DualPurposeOptions};
use crate::raster::{IndexedImage, RgbaImageData};

pub const BAND_COUNT: usize = 4;
pub const BAND_HEIGHT: u32 = ATLAS_SIZE / BAND_COUNT as u32;

/// One 128×32 slice of the atlas.
#[derive(Debug, Clone)]
pub struct SpriteBand {
    pub index: usize,
    pub image: IndexedImage,
}

impl SpriteBand {
    pub fn from_atlas(atlas: &Atlas, index: usize) -> Self {
        Self {
            index,
            image: atlas
                .image()
                .crop(0, index as u32 * BAND_HEIGHT, ATLAS_SIZE, BAND_HEIGHT),
        }
    }
}

/// Whether band `index` still holds sprites under `options`.
pub fn is_sprite_band(index: usize, options: DualPurposeOptions) -> bool {
    !DualPurposeBand::ALL
        .iter()
        .any(|&band| band.sheet_band() == index && options.is_active(band))
}

/// Bands that hold sprite data: 4 with no dual-purpose band, 3 with one, 2 with both.
///
/// An older export path used 2 bands whenever either option was set and
/// always took the first N bands. Here the repurposed band itself is
/// dropped, so with only section 3 enabled the sheet is bands 0, 1 and 3.
pub fn sprite_bands(atlas: &Atlas, options: DualPurposeOptions) -> Vec<SpriteBand> {
    (0..BAND_COUNT)
        .filter(|&index| is_sprite_band(index, options))
        .map(|index| SpriteBand::from_atlas(atlas, index))
        .collect()
}

/// Stack `bands` top to bottom into a 128×128 sheet; unused slots stay transparent.
pub fn compose_sheet(bands: &[SpriteBand]) -> RgbaImageData {
    let mut sheet = RgbaImageData::transparent(ATLAS_SIZE, ATLAS_SIZE);
    for (slot, band) in bands.iter().take(BAND_COUNT).enumerate() {
        sheet.paste(&band.image.to_rgba(), 0, slot as u32 * BAND_HEIGHT);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::RawSection;
    use crate::palette::{Rgba, PALETTE};

    /// Atlas whose band `n` is filled with color `n + 1`.
    fn banded_atlas() -> Atlas {
        let lines = (0..ATLAS_SIZE)
            .map(|y| {
                let digit = char::from_digit(y / BAND_HEIGHT + 1, 16).unwrap();
                digit.to_string().repeat(ATLAS_SIZE as usize)
            })
            .collect();
        Atlas::reconstruct(&RawSection::new(lines))
    }

    #[test]
    fn test_band_counts() {
        let atlas = banded_atlas();
        let count = |s3, s4| sprite_bands(&atlas, DualPurposeOptions::new(s3, s4)).len();
        assert_eq!(count(false, false), 4);
        assert_eq!(count(true, false), 3);
        assert_eq!(count(false, true), 3);
        assert_eq!(count(true, true), 2);
    }

    #[test]
    fn test_band_images() {
        let atlas = banded_atlas();
        let band = SpriteBand::from_atlas(&atlas, 2);
        assert_eq!(band.image.width(), 128);
        assert_eq!(band.image.height(), 32);
        assert!(band.image.indices().iter().all(|&i| i == 3));
    }

    #[test]
    fn test_sheet_geometry_is_constant() {
        let atlas = banded_atlas();
        for (s3, s4) in [(false, false), (true, false), (false, true), (true, true)] {
            let sheet = compose_sheet(&sprite_bands(&atlas, DualPurposeOptions::new(s3, s4)));
            assert_eq!((sheet.width, sheet.height), (128, 128));
            assert_eq!(sheet.data.len(), 128 * 128 * 4);
        }
    }

    #[test]
    fn test_sheet_skips_repurposed_band_and_pads() {
        let atlas = banded_atlas();
        let sheet = compose_sheet(&sprite_bands(&atlas, DualPurposeOptions::new(true, false)));

        assert_eq!(sheet.pixel(0, 0), PALETTE[1]);
        assert_eq!(sheet.pixel(0, 32), PALETTE[2]);
        // Band 3 moves up into slot 2
        assert_eq!(sheet.pixel(0, 64), PALETTE[4]);
        // Slot 3 is padding
        assert_eq!(sheet.pixel(0, 96), Rgba::TRANSPARENT);
        assert_eq!(sheet.pixel(127, 127).a, 0);
    }

    #[test]
    fn test_full_sheet_is_opaque() {
        let atlas = banded_atlas();
        let sheet = compose_sheet(&sprite_bands(&atlas, DualPurposeOptions::default()));
        assert!(sheet.data.chunks(4).all(|px| px[3] == 255));
    }
}
