//! Opaque tile generators (floor and wall stone).

mod floor;
mod wall;

pub use floor::{generate_floor_tile, FLOOR_VARIANT_COUNT};
pub use wall::generate_wall_tile;

use thiserror::Error;

/// Errors from tile generation.
#[derive(Debug, Error)]
pub enum TileError {
    /// Variant index outside the supported range.
    #[error("variant index {0} is out of range (expected 0..={max})", max = FLOOR_VARIANT_COUNT - 1)]
    InvalidVariant(u32),
}
