//! Stone floor tile generator.
//!
//! Signed noise over a dark base color with a highlight that decays with
//! distance from the top-left corner (a cheap directional light), then a
//! handful of short axis-aligned cracks darkened to near-black. The cracks
//! draw from an independently seeded stream so reshaping the surface noise
//! cannot move them.

use super::TileError;
use crate::raster::{Raster, Rgba};
use crate::rng::Lcg;
use crate::TILE_SIZE;

/// Number of supported floor variants.
pub const FLOOR_VARIANT_COUNT: u32 = 3;

const BASE_NOISE_SEED: u32 = 12345;
const CRACK_SEED: u32 = 98765;

const BASE_R: f64 = 32.0;
const BASE_G: f64 = 32.0;
const BASE_B: f64 = 36.0;

const CRACK_COUNT: u32 = 5;
const CRACK_COLOR: Rgba = Rgba::rgb(10, 10, 10);

/// Generate a 64x64 stone floor tile.
///
/// Each variant derives decorrelated seeds for both streams; variant 0
/// reproduces the originally shipped `floor_stone_0.png` pixels exactly.
pub fn generate_floor_tile(variant: u32) -> Result<Raster, TileError> {
    if variant >= FLOOR_VARIANT_COUNT {
        return Err(TileError::InvalidVariant(variant));
    }

    let mut raster = Raster::new(TILE_SIZE, TILE_SIZE);

    let mut noise = Lcg::new(Lcg::derive_variant_seed(BASE_NOISE_SEED, variant));
    for y in 0..TILE_SIZE {
        for x in 0..TILE_SIZE {
            // Subtle signed noise in a +/-10 band.
            let n = f64::from(noise.next_byte() % 21) - 10.0;
            // Top-left highlight bias, linear falloff.
            let highlight = f64::from((80 - (x + y) as i32 * 2).max(0));
            let r = (BASE_R + n + highlight * 0.2).clamp(0.0, 255.0) as u8;
            let g = (BASE_G + n + highlight * 0.2).clamp(0.0, 255.0) as u8;
            let b = (BASE_B + n + highlight * 0.3).clamp(0.0, 255.0) as u8;
            raster.set(x as i32, y as i32, Rgba::rgb(r, g, b));
        }
    }

    let mut cracks = Lcg::new(Lcg::derive_variant_seed(CRACK_SEED, variant));
    for _ in 0..CRACK_COUNT {
        let start_x = u32::from(cracks.next_byte()) % (TILE_SIZE - 2);
        let start_y = u32::from(cracks.next_byte()) % (TILE_SIZE - 2);
        let length = 5 + u32::from(cracks.next_byte()) % 10;
        let vertical = cracks.next_byte() % 2 != 0;
        for i in 0..length {
            let (x, y) = if vertical {
                (start_x, start_y + i)
            } else {
                (start_x + i, start_y)
            };
            if x >= TILE_SIZE || y >= TILE_SIZE {
                break;
            }
            raster.set(x as i32, y as i32, CRACK_COLOR);
        }
    }

    Ok(raster)
}
