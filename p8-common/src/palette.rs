//! PICO-8 16-color palette.

use serde::{Deserialize, Serialize};

/// One RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Fixed PICO-8 palette, indexed by color number.
pub const PALETTE: [Rgba; 16] = [
    Rgba::opaque(0, 0, 0),       // 0: Black
    Rgba::opaque(29, 43, 83),    // 1: Dark Blue
    Rgba::opaque(126, 37, 83),   // 2: Dark Purple
    Rgba::opaque(0, 135, 81),    // 3: Dark Green
    Rgba::opaque(171, 82, 54),   // 4: Brown
    Rgba::opaque(95, 87, 79),    // 5: Dark Gray
    Rgba::opaque(194, 195, 199), // 6: Light Gray
    Rgba::opaque(255, 241, 232), // 7: White
    Rgba::opaque(255, 0, 77),    // 8: Red
    Rgba::opaque(255, 163, 0),   // 9: Orange
    Rgba::opaque(255, 236, 39),  // 10: Yellow
    Rgba::opaque(0, 228, 54),    // 11: Green
    Rgba::opaque(41, 173, 255),  // 12: Blue
    Rgba::opaque(131, 118, 156), // 13: Indigo
    Rgba::opaque(255, 119, 168), // 14: Pink
    Rgba::opaque(255, 204, 170), // 15: Peach
];

/// Resolve a color index. Out-of-range indices resolve to black (index 0).
pub fn color(index: u8) -> Rgba {
    PALETTE
        .get(index as usize)
        .copied()
        .unwrap_or(PALETTE[0])
}
