//! Deterministic noise source.
//!
//! All texture generation MUST draw randomness through this module so that
//! a given seed reproduces the same asset byte-for-byte. Each independent
//! visual effect (base noise, crack placement, speckle) owns its own `Lcg`
//! instance with its own seed constant; streams are never shared between
//! effects, which keeps the patterns decorrelated.

/// Linear congruential generator over 32-bit state.
///
/// The state advances as `s = s * 1664525 + 1013904223 (mod 2^32)`. The
/// constants are a contract, not a tuning knob: tests pin literal output
/// sequences, and the shipped assets were generated from exactly this
/// stream.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;

    /// Stride between variant seeds. A large prime keeps variant streams
    /// visually uncorrelated while variant 0 stays identical to the base.
    const VARIANT_STRIDE: u32 = 15_485_863;

    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and scale it into a byte.
    ///
    /// Returns `floor(state / 2^32 * 255)`, so the range is `0..=254`.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        ((u64::from(self.state) * 255) >> 32) as u8
    }

    /// Derive the seed for a numbered variant of a base pattern.
    pub fn derive_variant_seed(base_seed: u32, variant: u32) -> u32 {
        base_seed.wrapping_add(variant.wrapping_mul(Self::VARIANT_STRIDE))
    }
}
