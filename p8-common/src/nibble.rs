//! Hexadecimal nibble decoding
//!
//! Cartridge sections store one hex digit per pixel (graphics) or two hex
//! digits per tile/flag byte (map, flags).

/// Decode one hex digit (`0-9`, `a-f`, `A-F`) to its 0..=15 value.
///
/// Returns `None` for anything else, including non-ASCII bytes.
pub const fn decode_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode one hex digit, treating invalid input as blank (0).
pub const fn nibble_or_zero(c: u8) -> u8 {
    match decode_nibble(c) {
        Some(v) => v,
        None => 0,
    }
}

/// Decode the two digits at `line[index * 2]` and `line[index * 2 + 1]`.
///
/// Digits are returned in the order they appear in the text; callers decide
/// which one is the row and which one is the column.
pub fn digit_pair(line: &[u8], index: usize) -> (u8, u8) {
    let first = line.get(index * 2).copied().map_or(0, nibble_or_zero);
    let second = line.get(index * 2 + 1).copied().map_or(0, nibble_or_zero);
    (first, second)
}

/// Number of complete digit pairs in a line.
pub fn pair_count(line: &[u8]) -> usize {
    line.len() / 2
}
