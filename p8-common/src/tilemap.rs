//! Tile map composition and rendering
//!
//! The `__map__` section holds 32 lines of 128 tiles, two hex digits per
//! tile. Here the first digit is the sprite **row** and the second the
//! sprite **column**, the reverse of the dual-purpose bands (see
//! [`crate::dual_purpose`]). Both orders are what existing carts were
//! exported with; which one is canonical is unresolved, so neither is
//! rewritten in terms of the other.

use crate::atlas::{sprite_id, Atlas, TILE_SIZE};
use crate::cart::RawSection;
use crate::dual_purpose::DualPurposeOptions;
use crate::nibble::{digit_pair, pair_count};
use crate::raster::IndexedImage;

/// Map width in tiles.
pub const MAP_WIDTH: u32 = 128;
/// Map height in tiles covered by the `__map__` section alone.
pub const BASE_MAP_HEIGHT: u32 = 32;

/// How a placement affects the rendered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    /// Copy the sprite's 8×8 block.
    Tile,
    /// Base-map position holding sprite 0; leaves the background as is.
    Empty,
    /// Paint the cell with color 0, overwriting whatever was drawn before.
    Blank,
}

/// One decoded map position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub sprite: u8,
    pub kind: PlacementKind,
}

/// Base map plus any dual-purpose bands, in drawing order.
#[derive(Debug, Clone)]
pub struct TileMap {
    height: u32,
    placements: Vec<Placement>,
}

impl TileMap {
    /// Decode the map section and the enabled dual-purpose bands.
    ///
    /// Base rows beyond 32 and tiles beyond column 127 are ignored.
    pub fn compose(map: &RawSection, graphics: &RawSection, options: DualPurposeOptions) -> Self {
        let mut placements = base_placements(map);
        for band in options.active_bands() {
            let band_placements = band.placements(graphics);
            tracing::debug!(
                band = band.name(),
                placements = band_placements.len(),
                "Decoded dual-purpose band"
            );
            placements.extend(band_placements);
        }

        Self {
            height: options.map_height(),
            placements,
        }
    }

    pub fn width(&self) -> u32 {
        MAP_WIDTH
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placements that draw a sprite.
    pub fn tile_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| p.kind == PlacementKind::Tile)
            .count()
    }

    /// Render the map at 8 pixels per tile over a color-0 background.
    pub fn render(&self, atlas: &Atlas) -> IndexedImage {
        let mut image = IndexedImage::new(self.width() * TILE_SIZE, self.height * TILE_SIZE);
        for p in &self.placements {
            let (dx, dy) = (p.x * TILE_SIZE, p.y * TILE_SIZE);
            match p.kind {
                PlacementKind::Tile => image.blit(
                    atlas.image(),
                    Atlas::sprite_origin(p.sprite),
                    (dx, dy),
                    (TILE_SIZE, TILE_SIZE),
                ),
                PlacementKind::Blank => image.fill_rect(dx, dy, TILE_SIZE, TILE_SIZE, 0),
                PlacementKind::Empty => {}
            }
        }
        image
    }
}

fn base_placements(map: &RawSection) -> Vec<Placement> {
    let mut out = Vec::new();
    for (y, line) in map.rows(0, BASE_MAP_HEIGHT as usize).iter().enumerate() {
        let line = line.as_bytes();
        for x in 0..pair_count(line).min(MAP_WIDTH as usize) {
            let (row, column) = digit_pair(line, x);
            let sprite = sprite_id(column as u32, row as u32);
            out.push(Placement {
                x: x as u32,
                y: y as u32,
                sprite,
                kind: if sprite != 0 {
                    PlacementKind::Tile
                } else {
                    PlacementKind::Empty
                },
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::ATLAS_SIZE;

    fn section(lines: Vec<String>) -> RawSection {
        RawSection::new(lines)
    }

    /// Atlas where sprite `id` is filled with color `id % 16` (0 stays 0).
    fn striped_atlas() -> Atlas {
        let lines = (0..ATLAS_SIZE)
            .map(|y| {
                (0..ATLAS_SIZE)
                    .map(|x| {
                        let id = (y / 8) * 16 + x / 8;
                        char::from_digit(id % 16, 16).unwrap()
                    })
                    .collect()
            })
            .collect();
        Atlas::reconstruct(&section(lines))
    }

    #[test]
    fn test_row_digit_first() {
        let map = section(vec!["12".to_string()]);
        let tiles = TileMap::compose(&map, &RawSection::default(), DualPurposeOptions::default());
        assert_eq!(tiles.placements()[0].sprite, 18);
        assert_eq!(tiles.placements()[0].kind, PlacementKind::Tile);
    }

    #[test]
    fn test_base_emits_every_position() {
        let map = section(vec!["00".repeat(128); 32]);
        let tiles = TileMap::compose(&map, &RawSection::default(), DualPurposeOptions::default());
        assert_eq!(tiles.placements().len(), 128 * 32);
        assert_eq!(tiles.tile_count(), 0);
        assert_eq!(tiles.height(), 32);
    }

    #[test]
    fn test_base_rows_clamped() {
        let map = section(vec!["01".repeat(200); 40]);
        let tiles = TileMap::compose(&map, &RawSection::default(), DualPurposeOptions::default());
        assert_eq!(tiles.placements().len(), 128 * 32);
        assert!(tiles.placements().iter().all(|p| p.x < 128 && p.y < 32));
    }

    #[test]
    fn test_render_copies_sprite_block() {
        let atlas = striped_atlas();
        // Sprite 3 (row 0, column 3) at map (1, 0)
        let map = section(vec!["0003".to_string()]);
        let tiles = TileMap::compose(&map, &RawSection::default(), DualPurposeOptions::default());
        let image = tiles.render(&atlas);

        assert_eq!(image.width(), 1024);
        assert_eq!(image.height(), 256);
        assert_eq!(image.get(8, 0), 3);
        assert_eq!(image.get(15, 7), 3);
        assert_eq!(image.get(0, 0), 0);
        assert_eq!(image.get(16, 0), 0);
    }

    #[test]
    fn test_render_with_bands() {
        let atlas = striped_atlas();
        let map = section(vec!["00".repeat(128); 32]);
        let mut graphics = vec!["0".repeat(128); 64];
        // Section 3, line 0: column 5, row 0 -> sprite 5 at map (0, 32)
        graphics.push(format!("50{}", "0".repeat(126)));
        let graphics = section(graphics);

        let tiles = TileMap::compose(&map, &graphics, DualPurposeOptions::new(true, false));
        assert_eq!(tiles.height(), 48);
        let image = tiles.render(&atlas);
        assert_eq!(image.height(), 48 * 8);
        assert_eq!(image.get(0, 32 * 8), 5);
        assert_eq!(image.get(8, 32 * 8), 0);
    }

    #[test]
    fn test_blank_overwrites_earlier_draw() {
        let atlas = striped_atlas();
        let mut tiles = TileMap::compose(
            &section(vec!["01".to_string()]),
            &RawSection::default(),
            DualPurposeOptions::default(),
        );
        tiles.placements.push(Placement {
            x: 0,
            y: 0,
            sprite: 0,
            kind: PlacementKind::Blank,
        });
        let image = tiles.render(&atlas);
        assert_eq!(image.get(0, 0), 0);
    }
}
