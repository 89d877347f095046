//! Display-level logging infrastructure shared across the whole crate.
//!
//! A single process-wide atomic verbosity knob, checked by a macro at each
//! call site rather than pulling in `log`/`tracing`.
//!
//! 0 = silent; 1 = errors only; 2 = normal (default); 3 = non-downgradable; 4 = verbose.

use std::sync::atomic::{AtomicU32, Ordering};

pub const NAME: &str = "mandelpool";
pub const AUTHOR: &str = "Christofer Lind, Sebastian Rautila, Adam Risberg, Andreas Widmark";

static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally print to stderr at or above `level` — equivalent to C
/// `DISPLAYLEVEL(l, ...)`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}
