//! Sprite flag decoding (`__gff__`)
//!
//! Two lines of 256 hex digits, two digits per sprite: line 0 covers sprites
//! 0..128, line 1 covers 128..256.

use crate::atlas::SPRITE_COUNT;
use crate::cart::RawSection;
use crate::nibble::digit_pair;

const SPRITES_PER_LINE: usize = 128;

/// One flag byte per sprite ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFlags {
    bytes: [u8; SPRITE_COUNT],
}

impl Default for SpriteFlags {
    fn default() -> Self {
        Self {
            bytes: [0; SPRITE_COUNT],
        }
    }
}

impl SpriteFlags {
    /// Decode the flag section. Sprites not covered by a line keep flag 0.
    pub fn decode(section: &RawSection) -> Self {
        let mut flags = Self::default();
        for (line_index, line) in section.lines().iter().take(2).enumerate() {
            let line = line.as_bytes();
            let covered = (line.len() / 2).min(SPRITES_PER_LINE);
            for i in 0..covered {
                let (hi, lo) = digit_pair(line, i);
                flags.bytes[line_index * SPRITES_PER_LINE + i] = hi * 16 + lo;
            }
        }
        flags
    }

    pub fn byte(&self, id: u8) -> u8 {
        self.bytes[id as usize]
    }

    /// Flag bits of one sprite; element `b` is bit `b` of the byte.
    pub fn bits(&self, id: u8) -> [bool; 8] {
        let byte = self.byte(id);
        std::array::from_fn(|b| (byte >> b) & 1 == 1)
    }

    /// Number of sprites with at least one flag set.
    pub fn flagged_count(&self) -> usize {
        self.bytes.iter().filter(|&&b| b != 0).count()
    }
}
