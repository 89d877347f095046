//! Output adapters for a finished render.
//!
//! Mirrors `prototype.c`'s `printPPMImage`, the original sources' only
//! external adapter: the core render path never touches a file handle.

pub mod ppm;

pub use ppm::write_ppm;
