//! In-memory RGBA raster with the paint operations the generators need.
//!
//! Writes are always bounds-checked: stamping a shape that wanders past the
//! canvas edge silently skips the out-of-range pixels. That clipping is the
//! only form of "error handling" in this module; nothing here fails.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A row-major grid of RGBA pixels.
///
/// Created zero-filled (transparent black), mutated in place by the paint
/// operations, then consumed read-only by the PNG encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a transparent raster of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * 4;
        Self {
            width,
            height,
            data: vec![0; size],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Read a pixel. Coordinates must be in bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::rgba(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Write a pixel. Out-of-range coordinates are a silent no-op.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx] = color.r;
            self.data[idx + 1] = color.g;
            self.data[idx + 2] = color.b;
            self.data[idx + 3] = color.a;
        }
    }

    /// Add a color onto a pixel, saturating each channel at 255.
    ///
    /// Used for accumulating overlapping splatter stamps: overlaps
    /// intensify instead of wrapping. Out-of-range coordinates are a
    /// silent no-op.
    #[inline]
    pub fn blend_add(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx] = self.data[idx].saturating_add(color.r);
            self.data[idx + 1] = self.data[idx + 1].saturating_add(color.g);
            self.data[idx + 2] = self.data[idx + 2].saturating_add(color.b);
            self.data[idx + 3] = self.data[idx + 3].saturating_add(color.a);
        }
    }

    /// Fill the whole canvas with one color.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Stamp a straight run of pixels from `(x0, y0)` along `angle` radians.
    ///
    /// Step `i` writes the floor of `(x0 + cos(angle) * i, y0 + sin(angle) * i)`.
    /// Pixels outside the canvas are skipped, so a line may run off the edge.
    pub fn stamp_line(&mut self, x0: i32, y0: i32, angle: f64, length: u32, color: Rgba) {
        let (dy, dx) = angle.sin_cos();
        for i in 0..length {
            let x = (f64::from(x0) + dx * f64::from(i)).floor() as i32;
            let y = (f64::from(y0) + dy * f64::from(i)).floor() as i32;
            self.set(x, y, color);
        }
    }

    /// Additively stamp a filled disc centered at `(cx, cy)`.
    ///
    /// Covers every pixel with `dx^2 + dy^2 <= radius^2`, clipped to the
    /// canvas.
    pub fn stamp_disc(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                self.blend_add(cx + dx, cy + dy, color);
            }
        }
    }
}
