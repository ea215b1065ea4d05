//! Conventional output paths.
//!
//! The game client's asset loader requests these paths verbatim; renaming
//! anything here is a cross-repo change.

use std::path::{Path, PathBuf};

/// Directory for tile textures, relative to the output root.
pub const TILES_DIR: &str = "assets/tiles";

/// Directory for decal textures, relative to the output root.
pub const DECALS_DIR: &str = "assets/decals";

/// Path for a floor tile variant.
pub fn floor_tile(root: &Path, variant: u32) -> PathBuf {
    root.join(TILES_DIR).join(format!("floor_stone_{variant}.png"))
}

/// Path for the wall tile.
pub fn wall_tile(root: &Path) -> PathBuf {
    root.join(TILES_DIR).join("wall_stone_0.png")
}

/// Path for the crack decal.
pub fn crack_decal(root: &Path) -> PathBuf {
    root.join(TILES_DIR).join("decal_crack_0.png")
}

/// Path for the blood decal.
pub fn blood_decal(root: &Path) -> PathBuf {
    root.join(DECALS_DIR).join("blood_0.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_the_loader_conventions() {
        let root = Path::new("/game");
        assert_eq!(
            floor_tile(root, 2),
            Path::new("/game/assets/tiles/floor_stone_2.png")
        );
        assert_eq!(
            wall_tile(root),
            Path::new("/game/assets/tiles/wall_stone_0.png")
        );
        assert_eq!(
            crack_decal(root),
            Path::new("/game/assets/tiles/decal_crack_0.png")
        );
        assert_eq!(
            blood_decal(root),
            Path::new("/game/assets/decals/blood_0.png")
        );
    }
}
