//! Minimal PNG encoder.
//!
//! Serializes a [`Raster`] to a standards-valid RGBA PNG byte stream:
//! signature, IHDR/IDAT/IEND chunk framing, CRC32 trailers, and
//! zlib-deflated filtered scanlines. No image library is involved; the only
//! external dependency is the deflate routine. The compression level is
//! fixed so repeated encodes of the same raster are byte-identical.

use std::path::Path;

use miniz_oxide::deflate::compress_to_vec_zlib;
use thiserror::Error;

use crate::raster::Raster;

/// Fixed eight-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;

/// Fastest deflate level. Any level yields a decodable stream; pinning one
/// keeps output byte-identical across runs.
const DEFLATE_LEVEL: u8 = 1;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

const fn build_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// CRC-32 lookup table (IEEE 802.3, reflected polynomial 0xEDB88320),
/// built once at compile time.
static CRC_TABLE: [u32; 256] = build_crc_table();

#[inline]
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    data.iter().fold(crc, |crc, &byte| {
        (crc >> 8) ^ CRC_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize]
    })
}

/// Standard CRC-32 over a byte slice, as stored in PNG chunk trailers.
pub fn crc32(data: &[u8]) -> u32 {
    !crc32_update(!0, data)
}

/// Append one chunk: big-endian length, type tag, payload, then the CRC32
/// computed over type + payload.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(payload);
    let crc = !crc32_update(crc32_update(!0, chunk_type), payload);
    out.extend_from_slice(&crc.to_be_bytes());
}

/// Encode a raster as a complete RGBA PNG byte stream.
///
/// The raster is read once and not mutated; the full file content is built
/// in memory.
pub fn encode_rgba(raster: &Raster) -> Result<Vec<u8>, PngError> {
    let (width, height) = (raster.width(), raster.height());
    if width == 0 || height == 0 {
        return Err(PngError::InvalidDimensions(format!("{width}x{height}")));
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // Bit depth, color type (RGBA), compression, filter, interlace.
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);

    // One leading filter-type byte (0 = None) per row, then the raw RGBA.
    let stride = width as usize * 4;
    let mut raw = Vec::with_capacity(height as usize * (1 + stride));
    for row in raster.data().chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }
    let compressed = compress_to_vec_zlib(&raw, DEFLATE_LEVEL);

    let mut out = Vec::with_capacity(SIGNATURE.len() + 3 * 12 + ihdr.len() + compressed.len());
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &compressed);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode a raster and return the bytes together with their BLAKE3 hash.
pub fn encode_rgba_with_hash(raster: &Raster) -> Result<(Vec<u8>, String), PngError> {
    let data = encode_rgba(raster)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Encode a raster and write the file in a single call.
pub fn write_rgba(raster: &Raster, path: &Path) -> Result<(), PngError> {
    let data = encode_rgba(raster)?;
    std::fs::write(path, data)?;
    Ok(())
}
