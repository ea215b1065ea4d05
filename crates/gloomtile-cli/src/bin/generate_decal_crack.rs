//! Generates the transparent crack decal PNG consumed by the game client.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use gloomtile_cli::commands;

/// Generate the deterministic 64x64 crack decal PNG
#[derive(Parser)]
#[command(name = "generate-decal-crack")]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    gloomtile_cli::report(commands::crack_decal(Path::new(".")))
}
