//! Dual-purpose sprite/map bands
//!
//! The lower half of the sprite sheet can double as extra map rows. When a
//! band is enabled its 32 graphics lines are read as tile coordinates rather
//! than pixels, and its sprite IDs stop being exported as sprites.
//!
//! ```text
//! band      atlas rows   sprite IDs   map rows
//! section3  64..96       128..=191    32..48
//! section4  96..128      192..=255    48..64
//! ```
//!
//! Each graphics line holds 64 tile pairs, half a map row. Even lines fill
//! the left half (columns 0..64) of map row `base + y / 2`, odd lines fill
//! the right half (columns 64..128) of the same row.

use crate::atlas::{sprite_id, TILE_SIZE};
use crate::cart::RawSection;
use crate::nibble::{digit_pair, pair_count};
use crate::tilemap::{Placement, PlacementKind, BASE_MAP_HEIGHT, MAP_WIDTH};

/// Graphics lines per band.
pub const BAND_ROWS: usize = 32;
/// Tile pairs per graphics line.
const PAIRS_PER_LINE: usize = MAP_WIDTH as usize / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DualPurposeBand {
    Section3,
    Section4,
}

impl DualPurposeBand {
    pub const ALL: [DualPurposeBand; 2] = [DualPurposeBand::Section3, DualPurposeBand::Section4];

    /// Index of the 128×32 sheet band this occupies (0..4).
    pub const fn sheet_band(self) -> usize {
        match self {
            DualPurposeBand::Section3 => 2,
            DualPurposeBand::Section4 => 3,
        }
    }

    /// First graphics line of the band.
    pub const fn first_atlas_row(self) -> usize {
        self.sheet_band() * BAND_ROWS
    }

    /// Map row that the band's first line pair lands on.
    pub const fn map_base_row(self) -> u32 {
        match self {
            DualPurposeBand::Section3 => BASE_MAP_HEIGHT,
            DualPurposeBand::Section4 => BASE_MAP_HEIGHT + (BAND_ROWS as u32 / 2),
        }
    }

    /// Inclusive sprite ID range this band covers.
    pub const fn sprite_range(self) -> (u8, u8) {
        let first = self.first_atlas_row() as u32 / TILE_SIZE * 16;
        (first as u8, (first + 63) as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            DualPurposeBand::Section3 => "section3",
            DualPurposeBand::Section4 => "section4",
        }
    }

    // (0,0) on a section 3 even line paints a blank tile; on section 3 odd
    // lines and anywhere in section 4 it draws nothing. Open question whether
    // the asymmetry is intended. Changing it changes rendered maps.
    const fn blanks_empty_tile(self, line: usize) -> bool {
        matches!(self, DualPurposeBand::Section3) && line % 2 == 0
    }

    /// Read the band's graphics lines as map placements.
    ///
    /// Each digit pair is `(column, row)` of the sprite to draw, column first.
    /// Lines past the end of the section are absent; short lines yield only
    /// the pairs they contain.
    pub fn placements(self, graphics: &RawSection) -> Vec<Placement> {
        let base = self.map_base_row();
        let mut out = Vec::new();

        for (y, line) in graphics
            .rows(self.first_atlas_row(), BAND_ROWS)
            .iter()
            .enumerate()
        {
            let line = line.as_bytes();
            let even = y % 2 == 0;
            let map_y = base + (y / 2) as u32;

            for x in 0..pair_count(line).min(PAIRS_PER_LINE) {
                let (column, row) = digit_pair(line, x);
                let map_x = (if even { x } else { PAIRS_PER_LINE + x }) as u32;

                let kind = if column != 0 || row != 0 {
                    PlacementKind::Tile
                } else if self.blanks_empty_tile(y) {
                    PlacementKind::Blank
                } else {
                    continue;
                };

                out.push(Placement {
                    x: map_x,
                    y: map_y,
                    sprite: sprite_id(column as u32, row as u32),
                    kind,
                });
            }
        }

        out
    }
}

/// Which dual-purpose bands are read as map data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DualPurposeOptions {
    pub section3: bool,
    pub section4: bool,
}

impl DualPurposeOptions {
    pub fn new(section3: bool, section4: bool) -> Self {
        Self { section3, section4 }
    }

    pub fn is_active(&self, band: DualPurposeBand) -> bool {
        match band {
            DualPurposeBand::Section3 => self.section3,
            DualPurposeBand::Section4 => self.section4,
        }
    }

    /// Enabled bands, in map order.
    pub fn active_bands(&self) -> impl Iterator<Item = DualPurposeBand> + '_ {
        DualPurposeBand::ALL
            .into_iter()
            .filter(move |&band| self.is_active(band))
    }

    /// Map height in tiles: 32, 48 with section 3, 64 with section 4.
    ///
    /// Section 4 alone still yields 64 rows; rows 32..48 stay background.
    pub fn map_height(&self) -> u32 {
        if self.section4 {
            DualPurposeBand::Section4.map_base_row() + BAND_ROWS as u32 / 2
        } else if self.section3 {
            DualPurposeBand::Section3.map_base_row() + BAND_ROWS as u32 / 2
        } else {
            BASE_MAP_HEIGHT
        }
    }

    /// Whether a sprite ID is still sprite data under these options.
    pub fn is_sprite_available(&self, id: u8) -> bool {
        !self.active_bands().any(|band| {
            let (start, end) = band.sprite_range();
            (start..=end).contains(&id)
        })
    }
}
