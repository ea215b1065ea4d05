//! Decal generators.
//!
//! Decals start from a fully transparent canvas and stamp a few randomly
//! placed features; the game composites them over tiles at draw time.

mod blood;
mod crack;

pub use blood::generate_blood_decal;
pub use crack::generate_crack_decal;
