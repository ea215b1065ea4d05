//! Generates the stone wall tile PNG consumed by the game client.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use gloomtile_cli::commands;

/// Generate the deterministic 64x64 stone wall tile PNG
#[derive(Parser)]
#[command(name = "generate-wall-tile")]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    gloomtile_cli::report(commands::wall_tile(Path::new(".")))
}
