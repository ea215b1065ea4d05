//! Gloomtile Texture Generation
//!
//! Deterministic procedural generation of the game's 64x64 stone tile and
//! decal PNGs. Given the fixed seeds baked into each generator, output is
//! byte-identical across runs and machines: the LCG noise source, every
//! paint operation, and the PNG encoder's compression settings are pinned.
//!
//! Data flows one direction:
//!
//! ```text
//! rng::Lcg -> tile/decal generators -> raster::Raster -> png::encode_rgba -> file
//! ```
//!
//! The PNG container (chunk framing, CRC32, zlib-deflated filtered
//! scanlines) is implemented here directly; the only external dependency of
//! the encoder is a general-purpose deflate routine.
//!
//! # Example
//!
//! ```no_run
//! use gloomtile_texture::{generate_floor_tile, png};
//! use std::path::Path;
//!
//! let raster = generate_floor_tile(0).unwrap();
//! png::write_rgba(&raster, Path::new("assets/tiles/floor_stone_0.png")).unwrap();
//! ```

pub mod decal;
pub mod png;
pub mod raster;
pub mod rng;
pub mod tile;

// Re-export main types for convenience
pub use decal::{generate_blood_decal, generate_crack_decal};
pub use png::{encode_rgba, encode_rgba_with_hash, hash_png, write_rgba, PngError};
pub use raster::{Raster, Rgba};
pub use rng::Lcg;
pub use tile::{generate_floor_tile, generate_wall_tile, TileError, FLOOR_VARIANT_COUNT};

/// Edge length of every generated tile and decal, in pixels.
pub const TILE_SIZE: u32 = 64;
