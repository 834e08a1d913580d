//! End-to-end cartridge conversion
//!
//! Runs every decode stage once over the cartridge text and keeps the
//! results; the export artifacts are derived on demand from them.

use crate::atlas::{Atlas, SPRITE_COUNT};
use crate::cart::{CartSections, SectionMarker};
use crate::dual_purpose::DualPurposeOptions;
use crate::error::CartError;
use crate::flags::SpriteFlags;
use crate::model::{SpriteAtlasDocument, TilemapDocument};
use crate::raster::{IndexedImage, RgbaImageData};
use crate::sheet::{self, SpriteBand};
use crate::tilemap::TileMap;

#[derive(Debug, Clone)]
pub struct Conversion {
    pub options: DualPurposeOptions,
    pub atlas: Atlas,
    pub flags: SpriteFlags,
    pub tilemap: TileMap,
}

impl Conversion {
    /// Decode a cartridge. Fails only if `__gfx__` or `__map__` is missing or empty.
    pub fn run(text: &str, options: DualPurposeOptions) -> Result<Self, CartError> {
        Self::from_sections(&CartSections::parse(text), options)
    }

    pub fn from_sections(
        sections: &CartSections,
        options: DualPurposeOptions,
    ) -> Result<Self, CartError> {
        let graphics = sections.require(SectionMarker::Graphics)?;
        let map = sections.require(SectionMarker::Map)?;

        tracing::debug!(
            graphics_lines = graphics.len(),
            map_lines = map.len(),
            flag_lines = sections.flags.len(),
            section3 = options.section3,
            section4 = options.section4,
            "Parsed cart sections"
        );

        let atlas = Atlas::reconstruct(graphics);
        let flags = SpriteFlags::decode(&sections.flags);
        let tilemap = TileMap::compose(map, graphics, options);

        Ok(Self {
            options,
            atlas,
            flags,
            tilemap,
        })
    }

    /// Sprite IDs exported as sprites under the current options.
    pub fn available_sprite_ids(&self) -> impl Iterator<Item = u8> + '_ {
        (0..SPRITE_COUNT)
            .map(|id| id as u8)
            .filter(|&id| self.options.is_sprite_available(id))
    }

    /// The full 128×128 atlas, resolved to RGBA.
    pub fn atlas_image(&self) -> RgbaImageData {
        self.atlas.image().to_rgba()
    }

    pub fn map_image(&self) -> IndexedImage {
        self.tilemap.render(&self.atlas)
    }

    pub fn sprite_image(&self, id: u8) -> IndexedImage {
        self.atlas.sprite_image(id)
    }

    pub fn sprite_bands(&self) -> Vec<SpriteBand> {
        sheet::sprite_bands(&self.atlas, self.options)
    }

    /// Composite sheet of the sprite bands, always 128×128.
    pub fn sheet_image(&self) -> RgbaImageData {
        sheet::compose_sheet(&self.sprite_bands())
    }

    pub fn atlas_document(&self) -> SpriteAtlasDocument {
        SpriteAtlasDocument::build(&self.atlas, &self.flags, self.options)
    }

    pub fn tilemap_document(&self, name: &str) -> TilemapDocument {
        TilemapDocument::build(&self.tilemap, name)
    }
}
