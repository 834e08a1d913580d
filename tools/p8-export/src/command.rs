//! Command implementations

use anyhow::{Context, Result};
use clap::Args;
use p8_common::{Conversion, DualPurposeOptions};
use std::path::{Path, PathBuf};

use crate::clean::clean_outputs;
use crate::config::{load_config, ExportSettings, Overrides};
use crate::export::export_all;
use crate::info::CartSummary;

/// Dual-purpose band selection shared by all commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BandArgs {
    /// Read sprite band 3 (sprites 128..191) as extra map rows
    #[arg(long = "section3", visible_alias = "3")]
    pub section3: bool,

    /// Read sprite band 4 (sprites 192..255) as extra map rows
    #[arg(long = "section4", visible_alias = "4")]
    pub section4: bool,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the PICO-8 cartridge (.p8)
    pub cart: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to p8export.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Remove artifacts of a previous export first
    #[arg(long)]
    pub clean: bool,

    #[command(flatten)]
    pub bands: BandArgs,
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the PICO-8 cartridge (.p8)
    pub cart: PathBuf,

    #[command(flatten)]
    pub bands: BandArgs,
}

fn read_cart(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to open cart file: {:?}", path))
}

/// Execute the export command
pub fn execute_export(args: ExportArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = ExportSettings::resolve(
        config,
        Overrides {
            cart: args.cart,
            output: args.output,
            clean: args.clean,
            section3: args.bands.section3,
            section4: args.bands.section4,
        },
    );

    if settings.clean {
        let removed = clean_outputs(&settings.output_dir)?;
        tracing::info!("Cleaned {} old artifacts", removed);
    }

    tracing::info!("Converting {:?} -> {:?}", settings.cart, settings.output_dir);
    let text = read_cart(&settings.cart)?;
    let conversion = Conversion::run(&text, settings.options)
        .with_context(|| format!("Cannot convert {:?}", settings.cart))?;

    let report = export_all(&conversion, &settings.output_dir, &settings.map_name());
    if !report.is_success() {
        anyhow::bail!(
            "{} of {} artifacts failed to export",
            report.failures.len(),
            report.failures.len() + report.written.len()
        );
    }

    tracing::info!("Done! {} files written", report.written.len());
    Ok(())
}

/// Execute the info command
pub fn execute_info(args: InfoArgs) -> Result<()> {
    let text = read_cart(&args.cart)?;
    let options = DualPurposeOptions::new(args.bands.section3, args.bands.section4);
    let summary = CartSummary::from_text(&text, options)
        .with_context(|| format!("Cannot read {:?}", args.cart))?;

    println!("Cart: {}", args.cart.display());
    println!("{}", summary);
    Ok(())
}
