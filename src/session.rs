//! Render configuration and output image buffer.
//!
//! Ported from `mandelData` in mandelbrot.c/mandelbrot.h:
//! `mandel_createMandelData` → [`RenderSession::new`], the zero-filled
//! `image` array → [`RenderSession`]'s pixel buffer, `mandel_destroyMandelData`
//! → ordinary `Drop` (nothing to free by hand in Rust).
//!
//! The C `image` is a flat `unsigned int*` mutated by whichever worker
//! thread is assigned a tile; synchronization is implicit because tiles
//! cover disjoint pixel ranges. This port keeps that same "disjoint writes,
//! no locking" contract but makes it sound under Rust's aliasing rules by
//! backing the buffer with `AtomicU32` — every store is a plain, uncontended
//! `Relaxed` write, and reads (for snapshotting the image or for the
//! CLI's PPM export) can happen concurrently with an in-progress render.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{Error, Result};
use crate::kernel::Region;
use crate::palette::Palette;

/// The full configuration and output buffer for one render. `width *
/// height` pixels, each an RGBA-packed `u32` (see [`crate::palette::pack_rgba`]),
/// initialized to `0` (transparent black) until a tile writes to them.
pub struct RenderSession {
    iterations: u32,
    region: Region,
    width: usize,
    height: usize,
    palette: Palette,
    image: Vec<AtomicU32>,
}

impl RenderSession {
    /// `mandel_createMandelData(iterations, xFrom, yFrom, xTo, yTo,
    /// imageWidth, imageHeight, c)`. Fails with [`Error::ConfigInvalid`] if
    /// `width` or `height` is zero, or if the complex-plane region has
    /// non-positive width or height.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        iterations: u32,
        x_from: f64,
        y_from: f64,
        x_to: f64,
        y_to: f64,
        width: usize,
        height: usize,
        palette: Palette,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::config_invalid(format!(
                "image dimensions must be nonzero, got {width}x{height}"
            )));
        }
        let region = Region::from_bounds(x_from, y_from, x_to, y_to);
        if region.w <= 0.0 || region.h <= 0.0 {
            return Err(Error::config_invalid(format!(
                "region must have positive extent, got w={} h={}",
                region.w, region.h
            )));
        }

        let mut image = Vec::with_capacity(width * height);
        image.resize_with(width * height, || AtomicU32::new(0));

        Ok(RenderSession {
            iterations,
            region,
            width,
            height,
            palette,
            image,
        })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Reads the packed RGBA color currently stored at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.image[y * self.width + x].load(Ordering::Relaxed)
    }

    /// Writes a packed RGBA color at `(x, y)`. Called by [`crate::kernel::render_tile`]
    /// from whichever worker thread was assigned the tile containing `(x,
    /// y)`; tiles never overlap, so concurrent calls never target the same
    /// index.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds.
    pub fn set_pixel(&self, x: usize, y: usize, color: u32) {
        self.image[y * self.width + x].store(color, Ordering::Relaxed);
    }

    /// A point-in-time snapshot of the whole image as row-major packed RGBA
    /// values, safe to call whether or not a render is still in progress
    /// (the C analogue of reading `renderThread.image` before joining the
    /// thread in `mandel_renderUnfinished`).
    pub fn snapshot(&self) -> Vec<u32> {
        self.image.iter().map(|p| p.load(Ordering::Relaxed)).collect()
    }
}
