//! Fatal cartridge errors
//!
//! Malformed section contents never end up here: bad hex digits and short
//! lines decode to blank data. Only a structurally absent required section
//! aborts a conversion.

use crate::cart::SectionMarker;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("No {marker} section found in cart")]
    MissingSection { marker: SectionMarker },
}
