use serde::{Deserialize, Serialize};

use super::DOCUMENT_VERSION;
use crate::tilemap::TileMap;

/// Tile map descriptor (`map.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilemapDocument {
    pub version: String,
    pub description: String,
    pub width: u32,
    pub height: u32,
    pub name: String,
    pub cells: Vec<MapCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCell {
    pub x: u32,
    pub y: u32,
    pub sprite: u8,
}

impl TilemapDocument {
    /// One cell per placement, in drawing order.
    ///
    /// Every base-map position is listed, sprite 0 included. Dual-purpose
    /// positions are listed only where the renderer touches them (tiles and
    /// explicit blanks).
    pub fn build(map: &TileMap, name: impl Into<String>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            description: "PICO-8 tile map".to_string(),
            width: map.width(),
            height: map.height(),
            name: name.into(),
            cells: map
                .placements()
                .iter()
                .map(|p| MapCell {
                    x: p.x,
                    y: p.y,
                    sprite: p.sprite,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
