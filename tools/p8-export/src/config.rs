//! Export configuration (p8export.toml)
//!
//! Every field is optional. Command-line arguments take precedence over the
//! file, and the file over built-in defaults.
//!
//! ```toml
//! [cart]
//! path = "game.p8"
//!
//! [output]
//! dir = "out"
//! clean = false
//!
//! [dual_purpose]
//! section3 = true
//! section4 = false
//! ```

use anyhow::{Context, Result};
use p8_common::DualPurposeOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "p8export.toml";
pub const DEFAULT_CART: &str = "cart.p8";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    #[serde(default)]
    pub cart: CartSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub dual_purpose: DualPurposeSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub clean: bool,
}

/// Which sprite bands are read as extra map rows.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DualPurposeSection {
    #[serde(default)]
    pub section3: bool,
    #[serde(default)]
    pub section4: bool,
}

impl ExportConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse export config")
    }
}

/// Load `explicit` if given (it must exist), otherwise [`DEFAULT_CONFIG_FILE`]
/// if present, otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ExportConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(ExportConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    ExportConfig::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
}

/// Command-line values that may override the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub cart: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub clean: bool,
    pub section3: bool,
    pub section4: bool,
}

/// Fully resolved settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub cart: PathBuf,
    pub output_dir: PathBuf,
    pub clean: bool,
    pub options: DualPurposeOptions,
}

impl ExportSettings {
    pub fn resolve(config: ExportConfig, overrides: Overrides) -> Self {
        Self {
            cart: overrides
                .cart
                .or(config.cart.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CART)),
            output_dir: overrides
                .output
                .or(config.output.dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            clean: overrides.clean || config.output.clean,
            options: DualPurposeOptions::new(
                overrides.section3 || config.dual_purpose.section3,
                overrides.section4 || config.dual_purpose.section4,
            ),
        }
    }

    /// Name recorded in the tilemap document: the cart file stem.
    pub fn map_name(&self) -> String {
        self.cart
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.trim_end_matches(".p8").to_string())
            .unwrap_or_else(|| "map".to_string())
    }
}
