//! Wall tile generator.
//!
//! Blocky mortared stones: the canvas is partitioned into 8x8 blocks, each
//! with a brightness offset hashed from its block coordinates so adjacent
//! blocks read as distinct stones. Pixels within two pixels of a block edge
//! darken toward the groove, and a second stream speckles roughly 30% of
//! pixels with a small delta.

use crate::raster::{Raster, Rgba};
use crate::rng::Lcg;
use crate::TILE_SIZE;

const BASE_NOISE_SEED: u32 = 98765;
const SPECKLE_SEED: u32 = 55555;

const BASE_R: f64 = 24.0;
const BASE_G: f64 = 24.0;
const BASE_B: f64 = 28.0;

const BLOCK_SIZE: u32 = 8;
const EDGE_SHADE: f64 = 45.0;

/// Per-block brightness offset in a +/-10 band, hashed from block coords.
fn block_offset(block_x: u32, block_y: u32) -> f64 {
    let hash = block_x
        .wrapping_mul(49297)
        .wrapping_add(block_y.wrapping_mul(9301))
        .wrapping_add(12345);
    f64::from(hash % 21) - 10.0
}

/// Generate the 64x64 stone wall tile.
pub fn generate_wall_tile() -> Raster {
    let mut raster = Raster::new(TILE_SIZE, TILE_SIZE);

    let mut noise = Lcg::new(BASE_NOISE_SEED);
    for y in 0..TILE_SIZE {
        for x in 0..TILE_SIZE {
            let n = f64::from(noise.next_byte() % 17) - 8.0;
            let block = block_offset(x / BLOCK_SIZE, y / BLOCK_SIZE);

            let wx = x % BLOCK_SIZE;
            let wy = y % BLOCK_SIZE;
            let edge_dist = wx.min(BLOCK_SIZE - 1 - wx).min(wy).min(BLOCK_SIZE - 1 - wy);
            let groove = if edge_dist < 2 {
                f64::from(2 - edge_dist) * -EDGE_SHADE
            } else {
                0.0
            };

            let delta = n + block + groove;
            let r = (BASE_R + delta).clamp(0.0, 255.0) as u8;
            let g = (BASE_G + delta).clamp(0.0, 255.0) as u8;
            let b = (BASE_B + delta).clamp(0.0, 255.0) as u8;
            raster.set(x as i32, y as i32, Rgba::rgb(r, g, b));
        }
    }

    // Speckle overlay. The delta draw happens only for selected pixels, so
    // the stream position depends on the selection history; the order of
    // the two draws is part of the output contract.
    let mut speckle = Lcg::new(SPECKLE_SEED);
    for y in 0..TILE_SIZE {
        for x in 0..TILE_SIZE {
            if speckle.next_byte() % 10 < 3 {
                let delta = i32::from(speckle.next_byte() % 20) - 10;
                let px = raster.get(x, y);
                let shift = |c: u8| (i32::from(c) + delta).clamp(0, 255) as u8;
                raster.set(
                    x as i32,
                    y as i32,
                    Rgba::rgba(shift(px.r), shift(px.g), shift(px.b), px.a),
                );
            }
        }
    }

    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_pixels() {
        let raster = generate_wall_tile();
        // Block corner: two-deep groove shading clamps to black.
        assert_eq!(raster.get(0, 0), Rgba::rgba(0, 0, 0, 255));
        // Interior of the first block.
        assert_eq!(raster.get(4, 4), Rgba::rgba(33, 33, 37, 255));
        // Interior of the neighboring block differs via the block hash.
        assert_eq!(raster.get(12, 4), Rgba::rgba(26, 26, 30, 255));
        // Same offset into the block below, for the transposed hash input.
        assert_eq!(raster.get(4, 12), Rgba::rgba(17, 17, 21, 255));
    }

    #[test]
    fn tile_is_fully_opaque() {
        let raster = generate_wall_tile();
        for y in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                assert_eq!(raster.get(x, y).a, 255);
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(generate_wall_tile(), generate_wall_tile());
    }

    #[test]
    fn block_offset_is_stable_and_banded() {
        assert_eq!(block_offset(3, 5), block_offset(3, 5));
        for bx in 0..8 {
            for by in 0..8 {
                let v = block_offset(bx, by);
                assert!((-10.0..=10.0).contains(&v));
            }
        }
    }
}
