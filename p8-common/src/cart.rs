//! Cartridge section extraction
//!
//! A `.p8` cartridge is plain text split into sections by marker lines such
//! as `__gfx__` or `__map__`. Any line starting with `__` ends the section
//! that is currently open.

use std::fmt;

use crate::error::CartError;

/// Prefix shared by every section marker line.
pub const MARKER_PREFIX: &str = "__";

/// Sections this crate knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionMarker {
    /// Sprite sheet pixels, one hex digit per pixel.
    Graphics,
    /// Tile map, two hex digits per tile.
    Map,
    /// Sprite flags, two hex digits per sprite.
    Flags,
}

impl SectionMarker {
    pub const fn tag(self) -> &'static str {
        match self {
            SectionMarker::Graphics => "__gfx__",
            SectionMarker::Map => "__map__",
            SectionMarker::Flags => "__gff__",
        }
    }
}

impl fmt::Display for SectionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Lines captured between a marker and the next marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSection {
    lines: Vec<String>,
}

impl RawSection {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Raw bytes of line `index`, or an empty slice past the end.
    pub fn line_bytes(&self, index: usize) -> &[u8] {
        self.lines
            .get(index)
            .map(|l| l.as_bytes())
            .unwrap_or_default()
    }

    /// Lines `start..start + count`, clamped to what the section holds.
    pub fn rows(&self, start: usize, count: usize) -> &[String] {
        let end = start.saturating_add(count).min(self.lines.len());
        if start >= end {
            return &[];
        }
        &self.lines[start..end]
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside,
}

/// Extract the lines of the section opened by `marker`.
///
/// A line starting with `marker` opens capture (the marker line itself is
/// not captured); any other line starting with [`MARKER_PREFIX`] closes it.
/// Lines are captured verbatim. If the marker appears more than once, every
/// occurrence contributes its lines in order.
pub fn extract_section(text: &str, marker: &str) -> RawSection {
    let (_, lines) = text.lines().fold(
        (ScanState::Outside, Vec::new()),
        |(state, mut lines), line| {
            let next = if line.starts_with(marker) {
                return (ScanState::Inside, lines);
            } else if line.starts_with(MARKER_PREFIX) {
                ScanState::Outside
            } else {
                state
            };
            if next == ScanState::Inside {
                lines.push(line.to_string());
            }
            (next, lines)
        },
    );
    RawSection::new(lines)
}

/// The three sections a conversion reads.
#[derive(Debug, Clone, Default)]
pub struct CartSections {
    pub graphics: RawSection,
    pub map: RawSection,
    pub flags: RawSection,
}

impl CartSections {
    pub fn parse(text: &str) -> Self {
        Self {
            graphics: extract_section(text, SectionMarker::Graphics.tag()),
            map: extract_section(text, SectionMarker::Map.tag()),
            flags: extract_section(text, SectionMarker::Flags.tag()),
        }
    }

    pub fn section(&self, marker: SectionMarker) -> &RawSection {
        match marker {
            SectionMarker::Graphics => &self.graphics,
            SectionMarker::Map => &self.map,
            SectionMarker::Flags => &self.flags,
        }
    }

    /// Fail with [`CartError::MissingSection`] if a required section is absent or empty.
    pub fn require(&self, marker: SectionMarker) -> Result<&RawSection, CartError> {
        let section = self.section(marker);
        if section.is_empty() {
            return Err(CartError::MissingSection { marker });
        }
        Ok(section)
    }
}
