//! PPM ("P6", binary, max value 255) image writer.
//!
//! Ported from `printPPMImage` in prototype.c: a three-line ASCII header
//! followed by one `(R, G, B)` byte triplet per pixel in row-major order.
//! The alpha channel `pack_rgba` always sets to `255` is not part of the PPM
//! format and is dropped here, matching the C writer's `fwrite(&img[...], 3,
//! 1, f)` (which writes the low 3 bytes of each little-endian `u32` and
//! silently discards the 4th).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::session::RenderSession;

/// Writes `image` (row-major, `width * height` packed-RGBA pixels) as a P6
/// PPM to `writer`.
pub fn write_ppm<W: Write>(writer: &mut W, image: &[u32], width: usize, height: usize) -> io::Result<()> {
    write!(writer, "P6\n{width} {height}\n255\n")?;

    let mut row = Vec::with_capacity(width * 3);
    for y in 0..height {
        row.clear();
        for x in 0..width {
            let pixel = image[y * width + x];
            row.push((pixel & 0xFF) as u8);
            row.push(((pixel >> 8) & 0xFF) as u8);
            row.push(((pixel >> 16) & 0xFF) as u8);
        }
        writer.write_all(&row)?;
    }

    Ok(())
}

/// Snapshots `session`'s current image and writes it as a PPM file at
/// `path`, creating or truncating it as needed. Safe to call while a render
/// is still in progress on another thread (the resulting file just reflects
/// whatever pixels had been written at the moment of the snapshot).
pub fn write_ppm_file(session: &RenderSession, path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, &session.snapshot(), session.width(), session.height())?;
    writer.flush()
}
