//! Crack decal generator.
//!
//! Short dark line segments at random angles on a transparent canvas.
//! Stamping is a plain write rather than an additive blend: a line that
//! revisits a pixel while wandering at a shallow angle stays at the fixed
//! crack color instead of double-darkening.

use std::f64::consts::PI;

use crate::raster::{Raster, Rgba};
use crate::rng::Lcg;
use crate::TILE_SIZE;

const SEED: u32 = 20260226;

const CRACK_COUNT: u32 = 6;
const CRACK_COLOR: Rgba = Rgba::rgba(20, 20, 20, 200);

/// Keeps crack starts away from the border so most of each line lands
/// on-canvas.
const PLACEMENT_MARGIN: u32 = 8;
const PLACEMENT_SPAN: u8 = 48;

/// Generate the 64x64 crack decal.
pub fn generate_crack_decal() -> Raster {
    let mut raster = Raster::new(TILE_SIZE, TILE_SIZE);

    let mut rng = Lcg::new(SEED);
    for _ in 0..CRACK_COUNT {
        let cx = (PLACEMENT_MARGIN + u32::from(rng.next_byte() % PLACEMENT_SPAN)) as i32;
        let cy = (PLACEMENT_MARGIN + u32::from(rng.next_byte() % PLACEMENT_SPAN)) as i32;
        let length = 4 + u32::from(rng.next_byte() % 12);
        let angle = f64::from(u32::from(rng.next_byte()) % 360) * PI / 180.0;
        raster.stamp_line(cx, cy, angle, length, CRACK_COLOR);
    }

    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamped_pixels(raster: &Raster) -> Vec<Rgba> {
        (0..TILE_SIZE)
            .flat_map(|y| (0..TILE_SIZE).map(move |x| raster.get(x, y)))
            .filter(|px| *px != Rgba::TRANSPARENT)
            .collect()
    }

    #[test]
    fn stamps_the_pinned_pixel_count() {
        let raster = generate_crack_decal();
        assert_eq!(stamped_pixels(&raster).len(), 57);
    }

    #[test]
    fn every_stamped_pixel_uses_the_crack_color() {
        let raster = generate_crack_decal();
        for px in stamped_pixels(&raster) {
            assert_eq!(px, CRACK_COLOR);
        }
    }

    #[test]
    fn background_stays_transparent() {
        let raster = generate_crack_decal();
        assert_eq!(raster.get(0, 0), Rgba::TRANSPARENT);
        assert_eq!(raster.get(63, 0), Rgba::TRANSPARENT);
        assert_eq!(raster.get(0, 63), Rgba::TRANSPARENT);
        assert_eq!(raster.get(63, 63), Rgba::TRANSPARENT);
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(generate_crack_decal(), generate_crack_decal());
    }
}
