//! Generates the stone floor tile PNGs consumed by the game client.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use gloomtile_cli::commands;

/// Generate a deterministic 64x64 stone floor tile PNG
#[derive(Parser)]
#[command(name = "generate-floor-tile")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Variant index; each variant draws from a decorrelated seed
    #[arg(value_parser = clap::value_parser!(u32).range(0..=2), default_value_t = 0)]
    variant: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();
    gloomtile_cli::report(commands::floor_tile(Path::new("."), args.variant))
}
