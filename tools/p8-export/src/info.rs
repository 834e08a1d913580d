//! Cartridge summary for the `info` command

use p8_common::{CartSections, Conversion, DualPurposeOptions, SectionMarker};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub graphics_lines: usize,
    pub map_lines: usize,
    /// `None` when the cart has no `__gff__` section.
    pub flag_lines: Option<usize>,
    pub used_sprites: usize,
    pub available_sprites: usize,
    pub flagged_sprites: usize,
    pub map_width: u32,
    pub map_height: u32,
    pub map_tiles: usize,
}

impl CartSummary {
    pub fn from_text(text: &str, options: DualPurposeOptions) -> anyhow::Result<Self> {
        let sections = CartSections::parse(text);
        let conversion = Conversion::from_sections(&sections, options)?;
        let flags = sections.section(SectionMarker::Flags);
        let atlas_doc = conversion.atlas_document();

        Ok(Self {
            graphics_lines: sections.graphics.len(),
            map_lines: sections.map.len(),
            flag_lines: (!flags.is_empty()).then(|| flags.len()),
            used_sprites: atlas_doc.used_count(),
            available_sprites: atlas_doc.metadata.available_sprites.total,
            flagged_sprites: conversion.flags.flagged_count(),
            map_width: conversion.tilemap.width(),
            map_height: conversion.tilemap.height(),
            map_tiles: conversion.tilemap.tile_count(),
        })
    }
}

impl fmt::Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}: {} lines", SectionMarker::Graphics, self.graphics_lines)?;
        writeln!(f, "  {}: {} lines", SectionMarker::Map, self.map_lines)?;
        match self.flag_lines {
            Some(lines) => writeln!(f, "  {}: {} lines", SectionMarker::Flags, lines)?,
            None => writeln!(f, "  {}: absent", SectionMarker::Flags)?,
        }
        writeln!(
            f,
            "  Sprites: {} used of {} available",
            self.used_sprites, self.available_sprites
        )?;
        writeln!(f, "  Flagged sprites: {}", self.flagged_sprites)?;
        write!(
            f,
            "  Map: {}x{} tiles, {} drawn",
            self.map_width, self.map_height, self.map_tiles
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let text = "__gfx__\n0700\n__gff__\n0001\n__map__\n0100\n\n";
        let summary = CartSummary::from_text(text, DualPurposeOptions::default()).unwrap();

        assert_eq!(summary.graphics_lines, 1);
        assert_eq!(summary.map_lines, 2);
        assert_eq!(summary.flag_lines, Some(1));
        assert_eq!(summary.used_sprites, 1);
        assert_eq!(summary.available_sprites, 256);
        assert_eq!(summary.flagged_sprites, 1);
        assert_eq!((summary.map_width, summary.map_height), (128, 32));
        assert_eq!(summary.map_tiles, 1);

        let printed = summary.to_string();
        assert!(printed.contains("__gff__: 1 lines"));
        assert!(printed.contains("1 used of 256 available"));
    }

    #[test]
    fn test_summary_without_flags() {
        let text = "__gfx__\n00\n__map__\n00\n";
        let summary = CartSummary::from_text(text, DualPurposeOptions::new(true, true)).unwrap();
        assert_eq!(summary.flag_lines, None);
        assert_eq!(summary.available_sprites, 128);
        assert_eq!(summary.map_height, 64);
        assert!(summary.to_string().contains("__gff__: absent"));
    }

    #[test]
    fn test_summary_missing_map() {
        let err = CartSummary::from_text("__gfx__\n00\n", DualPurposeOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("__map__"));
    }
}
