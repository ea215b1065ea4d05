//! Blood splatter decal generator.
//!
//! Filled red discs of random radius on a transparent canvas, combined
//! with the saturating additive blend so overlapping blobs intensify
//! instead of wrapping.

use crate::raster::{Raster, Rgba};
use crate::rng::Lcg;
use crate::TILE_SIZE;

const SEED: u32 = 99887766;

const BLOB_COUNT: u32 = 5;
const BLOOD_COLOR: Rgba = Rgba::rgba(180, 20, 20, 200);

const PLACEMENT_MARGIN: u32 = 8;
const PLACEMENT_SPAN: u8 = 48;

/// Generate the 64x64 blood splatter decal.
pub fn generate_blood_decal() -> Raster {
    let mut raster = Raster::new(TILE_SIZE, TILE_SIZE);

    let mut rng = Lcg::new(SEED);
    for _ in 0..BLOB_COUNT {
        let cx = (PLACEMENT_MARGIN + u32::from(rng.next_byte() % PLACEMENT_SPAN)) as i32;
        let cy = (PLACEMENT_MARGIN + u32::from(rng.next_byte() % PLACEMENT_SPAN)) as i32;
        let radius = 2 + i32::from(rng.next_byte() % 4);
        raster.stamp_disc(cx, cy, radius, BLOOD_COLOR);
    }

    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_blob_center() {
        let raster = generate_blood_decal();
        // First blob for this seed lands at (18, 54) with radius 2.
        assert_eq!(raster.get(18, 54), BLOOD_COLOR);
    }

    #[test]
    fn touched_pixel_count_is_pinned() {
        let raster = generate_blood_decal();
        let raster = &raster;
        let touched = (0..TILE_SIZE)
            .flat_map(|y| (0..TILE_SIZE).map(move |x| raster.get(x, y)))
            .filter(|px| px.a > 0)
            .count();
        assert_eq!(touched, 173);
    }

    #[test]
    fn background_stays_transparent() {
        let raster = generate_blood_decal();
        assert_eq!(raster.get(0, 0), Rgba::TRANSPARENT);
        assert_eq!(raster.get(63, 63), Rgba::TRANSPARENT);
    }

    #[test]
    fn no_channel_wraps_under_overlap() {
        // The shipped seed happens not to overlap blobs, so every touched
        // pixel carries exactly one stamp; either way no channel may exceed
        // the saturation bound.
        let raster = generate_blood_decal();
        for y in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                let px = raster.get(x, y);
                assert!(px == Rgba::TRANSPARENT || (px.r >= 180 && px.a >= 200));
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(generate_blood_decal(), generate_blood_decal());
    }
}
