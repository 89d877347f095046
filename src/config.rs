// config.rs — compile-time configuration constants.
// Migrated from the original C config knobs (threadpool.c worker counts,
// colorpalette.c's hardcoded colorWrapping) plus new defaults needed to
// drive the CLI.

/// Default maximum iteration count for escape-time, used when the CLI is not
/// given an explicit `--iterations`.
pub const ITERATIONS_DEFAULT: u32 = 1000;

/// Default palette wrap factor. Corresponds to `colorWrapping = 15.0` in
/// colorpalette.c.
pub const WRAP_FACTOR_DEFAULT: f64 = 15.0;

/// Default tile split factor (an `s x s` grid of tiles). Can be overridden by
/// the `MANDELPOOL_SPLIT` environment variable, or the `-S#` CLI flag.
pub const SPLIT_DEFAULT: usize = 8;

/// Maximum split factor accepted from configuration. Enforced by
/// [`crate::dispatcher::render`], which rejects `split` above this ceiling
/// with [`crate::error::Error::ConfigInvalid`] before allocating any tile
/// jobs, guarding against a typo'd `--split 100000`.
pub const SPLIT_MAX: usize = 4096;

/// Maximum worker count accepted from configuration. Enforced by
/// [`crate::threadpool::WorkerPool::new`], which rejects a thread count
/// above this ceiling with [`crate::error::Error::ConfigInvalid`] before
/// spawning any threads, guarding against a typo'd `--workers` flag.
pub const NB_WORKERS_MAX: usize = 1024;

/// Default number of worker threads: the number of logical cores available,
/// falling back to 1. Can be overridden by the `MANDELPOOL_WORKERS`
/// environment variable, or the `-T#` CLI flag.
///
/// `std::thread::available_parallelism` is the portable replacement for the
/// platform-specific core-counting code a C implementation would need.
pub fn nb_workers_default() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
