//! Gloomtile CLI - command-line texture asset generators
//!
//! Each binary under `src/bin/` is a thin argument parser over a function
//! in [`commands`]. The command functions take an output root so tests can
//! point them at a temporary directory; the binaries pass the current
//! directory, which makes the conventional `assets/...` paths land where
//! the game client expects them.

pub mod commands;
pub mod outputs;

use std::process::ExitCode;

use colored::Colorize;

use commands::WrittenAsset;

/// Print the outcome of a command and convert it to a process exit code.
///
/// Failures go to stderr with the full anyhow context chain; there is no
/// partial output to clean up because files are written from fully built
/// in-memory buffers.
pub fn report(result: anyhow::Result<WrittenAsset>) -> ExitCode {
    match result {
        Ok(asset) => {
            println!(
                "{} {} (blake3 {})",
                "Generated".green(),
                asset.path.display(),
                asset.hash
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
