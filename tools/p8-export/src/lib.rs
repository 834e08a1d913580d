//! p8-export library
//!
//! File-level side of the PICO-8 converter: config loading, cleaning,
//! PNG/JSON export and the command entry points used by the binary.

pub mod clean;
pub mod command;
pub mod config;
pub mod export;
pub mod info;
pub mod png_writer;

pub use command::{BandArgs, ExportArgs, InfoArgs};
pub use config::{ExportConfig, ExportSettings};
pub use export::{export_all, ExportReport};
