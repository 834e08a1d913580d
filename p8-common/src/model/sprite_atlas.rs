use serde::{Deserialize, Serialize};

use super::DOCUMENT_VERSION;
use crate::atlas::{sprite_position, Atlas, SpritePixels, GRID_SIZE, SPRITE_COUNT, TILE_SIZE};
use crate::dual_purpose::{DualPurposeBand, DualPurposeOptions};
use crate::flags::SpriteFlags;
use crate::palette::{Rgba, PALETTE};

/// Sprite atlas descriptor (`spritesheet.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAtlasDocument {
    pub version: String,
    pub description: String,
    pub sprites: Vec<SpriteRecord>,
    pub metadata: AtlasMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteRecord {
    pub id: u8,
    /// Grid column.
    pub x: u32,
    /// Grid row.
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Color indices, `pixels[row][column]`.
    pub pixels: SpritePixels,
    pub flags: SpriteFlagRecord,
    /// Any pixel non-zero.
    pub used: bool,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteFlagRecord {
    pub bitfield: u8,
    /// Bit 0 first.
    pub individual: [bool; 8],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasMetadata {
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    pub available_sprites: AvailableSprites,
    pub palette: Vec<Rgba>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableSprites {
    pub total: usize,
    pub ranges: Vec<AvailableRange>,
    pub sections: SectionAvailability,
}

/// Inclusive sprite ID interval exported as sprites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableRange {
    pub start: u8,
    pub end: u8,
    /// Any sprite in the range has non-zero pixels.
    pub used: bool,
    pub description: String,
}

impl AvailableRange {
    /// Number of sprite IDs in the range.
    pub fn count(&self) -> usize {
        self.end as usize - self.start as usize + 1
    }

    pub fn contains(&self, id: u8) -> bool {
        (self.start..=self.end).contains(&id)
    }
}

/// Whether each atlas region is exported as sprite data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAvailability {
    pub base: bool,
    pub section3: bool,
    pub section4: bool,
}

/// File name of a sprite's PNG export.
pub fn sprite_filename(id: u8) -> String {
    format!("sprite_{:03}.png", id)
}

/// Sprite ID ranges still holding sprites under `options`.
///
/// The base range 0-127 is always present; each dual-purpose range is
/// present only while its band is not read as map data.
pub fn available_ranges(atlas: &Atlas, options: DualPurposeOptions) -> Vec<AvailableRange> {
    let range = |start: u8, end: u8, description: &str| AvailableRange {
        start,
        end,
        used: (start..=end).any(|id| atlas.is_sprite_used(id)),
        description: description.to_string(),
    };

    let mut ranges = vec![range(0, 127, "Base sprites (0-127)")];
    for band in DualPurposeBand::ALL {
        if options.is_active(band) {
            continue;
        }
        let (start, end) = band.sprite_range();
        let description = match band {
            DualPurposeBand::Section3 => "Section 3 sprites (128-191)",
            DualPurposeBand::Section4 => "Section 4 sprites (192-255)",
        };
        ranges.push(range(start, end, description));
    }
    ranges
}

impl SpriteAtlasDocument {
    pub fn build(atlas: &Atlas, flags: &SpriteFlags, options: DualPurposeOptions) -> Self {
        let ranges = available_ranges(atlas, options);

        let sprites = (0..SPRITE_COUNT)
            .map(|id| id as u8)
            .filter(|&id| ranges.iter().any(|r| r.contains(id)))
            .map(|id| {
                let (x, y) = sprite_position(id);
                let pixels = atlas.sprite_pixels(id);
                SpriteRecord {
                    id,
                    x,
                    y,
                    width: TILE_SIZE,
                    height: TILE_SIZE,
                    used: pixels.iter().flatten().any(|&px| px != 0),
                    pixels,
                    flags: SpriteFlagRecord {
                        bitfield: flags.byte(id),
                        individual: flags.bits(id),
                    },
                    filename: sprite_filename(id),
                }
            })
            .collect();

        Self {
            version: DOCUMENT_VERSION.to_string(),
            description: "PICO-8 sprite atlas".to_string(),
            sprites,
            metadata: AtlasMetadata {
                sprite_width: TILE_SIZE,
                sprite_height: TILE_SIZE,
                grid_width: GRID_SIZE,
                grid_height: GRID_SIZE,
                available_sprites: AvailableSprites {
                    total: ranges.iter().map(AvailableRange::count).sum(),
                    sections: SectionAvailability {
                        base: true,
                        section3: !options.section3,
                        section4: !options.section4,
                    },
                    ranges,
                },
                palette: PALETTE.to_vec(),
            },
        }
    }

    pub fn used_count(&self) -> usize {
        self.sprites.iter().filter(|s| s.used).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
