//! Descriptor documents
//!
//! JSON projections of the decoded cartridge, written next to the PNG
//! exports. Field names are camelCase on the wire.

mod sprite_atlas;
mod tilemap;

pub use sprite_atlas::{
    available_ranges, sprite_filename, AtlasMetadata, AvailableRange, AvailableSprites,
    SectionAvailability, SpriteAtlasDocument, SpriteFlagRecord, SpriteRecord,
};
pub use tilemap::{MapCell, TilemapDocument};

/// Version tag written into every document.
pub const DOCUMENT_VERSION: &str = "1.0";
