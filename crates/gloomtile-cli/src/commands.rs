//! Generate-and-write commands, one per tool binary.
//!
//! Every command builds the full PNG byte buffer in memory, then writes it
//! with a single call. The output directory must already exist; a missing
//! directory propagates as a fatal error rather than being created behind
//! the asset loader's back.

use std::path::{Path, PathBuf};

use anyhow::Context;
use gloomtile_texture::{
    encode_rgba_with_hash, generate_blood_decal, generate_crack_decal, generate_floor_tile,
    generate_wall_tile, Raster,
};

use crate::outputs;

/// A written asset: where it landed and the BLAKE3 digest of its bytes.
#[derive(Debug)]
pub struct WrittenAsset {
    pub path: PathBuf,
    pub hash: String,
}

/// Generate and write a floor tile variant.
pub fn floor_tile(root: &Path, variant: u32) -> anyhow::Result<WrittenAsset> {
    let raster = generate_floor_tile(variant)?;
    write_asset(&raster, outputs::floor_tile(root, variant))
}

/// Generate and write the wall tile.
pub fn wall_tile(root: &Path) -> anyhow::Result<WrittenAsset> {
    write_asset(&generate_wall_tile(), outputs::wall_tile(root))
}

/// Generate and write the crack decal.
pub fn crack_decal(root: &Path) -> anyhow::Result<WrittenAsset> {
    write_asset(&generate_crack_decal(), outputs::crack_decal(root))
}

/// Generate and write the blood decal.
pub fn blood_decal(root: &Path) -> anyhow::Result<WrittenAsset> {
    write_asset(&generate_blood_decal(), outputs::blood_decal(root))
}

fn write_asset(raster: &Raster, path: PathBuf) -> anyhow::Result<WrittenAsset> {
    let (data, hash) = encode_rgba_with_hash(raster)?;
    std::fs::write(&path, &data)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(WrittenAsset { path, hash })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_asset_dirs() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(outputs::TILES_DIR)).unwrap();
        std::fs::create_dir_all(dir.path().join(outputs::DECALS_DIR)).unwrap();
        dir
    }

    fn decode(path: &Path) -> (png::OutputInfo, Vec<u8>) {
        let data = std::fs::read(path).unwrap();
        let decoder = png::Decoder::new(&data[..]);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn floor_tile_writes_a_decodable_png() {
        let dir = with_asset_dirs();
        let asset = floor_tile(dir.path(), 1).unwrap();
        assert_eq!(asset.path, outputs::floor_tile(dir.path(), 1));

        let (info, pixels) = decode(&asset.path);
        assert_eq!((info.width, info.height), (64, 64));
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(pixels, generate_floor_tile(1).unwrap().data());
    }

    #[test]
    fn invalid_variant_fails_without_writing() {
        let dir = with_asset_dirs();
        assert!(floor_tile(dir.path(), 5).is_err());
        assert!(!outputs::floor_tile(dir.path(), 5).exists());
    }

    #[test]
    fn missing_directory_is_a_fatal_error() {
        let dir = tempfile::tempdir().unwrap();
        // No assets/tiles created on purpose.
        assert!(wall_tile(dir.path()).is_err());
    }

    #[test]
    fn repeated_runs_write_identical_bytes() {
        let dir = with_asset_dirs();
        let first = blood_decal(dir.path()).unwrap();
        let bytes1 = std::fs::read(&first.path).unwrap();
        let second = blood_decal(dir.path()).unwrap();
        let bytes2 = std::fs::read(&second.path).unwrap();
        assert_eq!(bytes1, bytes2);
        assert_eq!(first.hash, second.hash);
    }

    #[test]
    fn every_tool_writes_its_conventional_path() {
        let dir = with_asset_dirs();
        assert_eq!(
            wall_tile(dir.path()).unwrap().path,
            outputs::wall_tile(dir.path())
        );
        assert_eq!(
            crack_decal(dir.path()).unwrap().path,
            outputs::crack_decal(dir.path())
        );
        assert_eq!(
            blood_decal(dir.path()).unwrap().path,
            outputs::blood_decal(dir.path())
        );
    }

    #[test]
    fn decal_pngs_keep_their_transparency() {
        let dir = with_asset_dirs();
        let asset = crack_decal(dir.path()).unwrap();
        let (_, pixels) = decode(&asset.path);
        // Top-left pixel of the crack decal is fully transparent.
        assert_eq!(&pixels[..4], &[0, 0, 0, 0]);
    }
}
