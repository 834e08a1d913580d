//! Shared types and decoders for PICO-8 cartridge asset conversion
//!
//! Everything in this crate is a pure transformation over in-memory data:
//! the cartridge text goes in, indexed rasters and descriptor documents come
//! out. File I/O and PNG/JSON encoding live in `p8-export`.
//!
//! # Pipeline
//! ```text
//! cart text ─▶ sections ─▶ atlas ─┬─▶ tilemap (+ dual-purpose bands) ─▶ map raster / map.json
//!                        └─ flags ─┴─▶ sprite atlas document
//!                                  └─▶ sprite bands ─▶ composite sheet
//! ```

pub mod atlas;
pub mod cart;
pub mod conversion;
pub mod dual_purpose;
pub mod error;
pub mod flags;
pub mod model;
pub mod nibble;
pub mod palette;
pub mod raster;
pub mod sheet;
pub mod tilemap;

pub use atlas::{Atlas, ATLAS_SIZE, GRID_SIZE, SPRITE_COUNT, TILE_SIZE};
pub use cart::{extract_section, CartSections, RawSection, SectionMarker};
pub use conversion::Conversion;
pub use dual_purpose::{DualPurposeBand, DualPurposeOptions};
pub use error::CartError;
pub use flags::SpriteFlags;
pub use model::{AvailableRange, SpriteAtlasDocument, TilemapDocument};
pub use nibble::{decode_nibble, nibble_or_zero};
pub use palette::{Rgba, PALETTE};
pub use raster::{IndexedImage, RgbaImageData};
pub use sheet::{SpriteBand, BAND_COUNT, BAND_HEIGHT};
pub use tilemap::{Placement, PlacementKind, TileMap, MAP_WIDTH};
