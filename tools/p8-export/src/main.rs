//! p8-export - PICO-8 cartridge asset export tool
//!
//! Converts the graphics, map and flag sections of a `.p8` cartridge to
//! PNG images (map, sprite sheet, individual sprites) and JSON descriptors.

use anyhow::Result;
use clap::{Parser, Subcommand};
use p8_export::command::{self, ExportArgs, InfoArgs};

#[derive(Parser)]
#[command(name = "p8-export")]
#[command(about = "PICO-8 cartridge asset export tool")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export map, sprites and descriptors from a cartridge
    Export(ExportArgs),

    /// Print a summary of a cartridge without writing anything
    Info(InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match cli.command {
        Commands::Export(args) => command::execute_export(args),
        Commands::Info(args) => command::execute_info(args),
    }
}
