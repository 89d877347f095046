//! Command-line argument parsing for the `mandelpool` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! The flag surface is small enough that `clap`'s derive API covers it
//! directly rather than a hand-rolled argv loop.

use clap::{Parser, ValueEnum};

use crate::config;

/// Named palette presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteName {
    Classic,
    Grayscale,
    Fire,
}

impl PaletteName {
    pub fn build(self) -> crate::palette::Palette {
        match self {
            PaletteName::Classic => crate::palette::Palette::classic(),
            PaletteName::Grayscale => crate::palette::Palette::grayscale(),
            PaletteName::Fire => crate::palette::Palette::fire(),
        }
    }
}

/// Render a Mandelbrot set visualization to a PPM file using a fixed-size
/// worker pool.
#[derive(Debug, Parser)]
#[command(name = crate::cli::constants::NAME, version, about)]
pub struct Cli {
    /// Output PPM file path.
    #[arg(short, long, default_value = "mandelbrot.ppm")]
    pub output: String,

    /// Image width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Image height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Minimum real-axis bound of the rendered region.
    #[arg(long, default_value_t = -2.5)]
    pub re_min: f64,

    /// Maximum real-axis bound of the rendered region.
    #[arg(long, default_value_t = 1.0)]
    pub re_max: f64,

    /// Minimum imaginary-axis bound of the rendered region.
    #[arg(long, default_value_t = -1.25)]
    pub im_min: f64,

    /// Maximum imaginary-axis bound of the rendered region.
    #[arg(long, default_value_t = 1.25)]
    pub im_max: f64,

    /// Maximum escape-time iteration count.
    #[arg(short, long, default_value_t = config::ITERATIONS_DEFAULT)]
    pub iterations: u32,

    /// Number of worker threads. Defaults to the number of logical cores.
    /// Overridable by the `MANDELPOOL_WORKERS` environment variable.
    #[arg(short = 'T', long, env = "MANDELPOOL_WORKERS")]
    pub workers: Option<usize>,

    /// Tile split factor: the region is divided into `split x split` tiles.
    /// Overridable by the `MANDELPOOL_SPLIT` environment variable.
    #[arg(short = 'S', long, env = "MANDELPOOL_SPLIT", default_value_t = config::SPLIT_DEFAULT)]
    pub split: usize,

    /// Named color palette.
    #[arg(short, long, value_enum, default_value = "classic")]
    pub palette: PaletteName,

    /// Render asynchronously (spawn a driver thread and join it) instead of
    /// blocking directly on `render`. Produces an identical image; exercises
    /// the async completion-handle path.
    #[arg(long)]
    pub r#async: bool,
}

impl Cli {
    /// Resolved worker count: the explicit `--workers` value if given,
    /// otherwise [`config::nb_workers_default`].
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(config::nb_workers_default)
    }
}

/// Parse `std::env::args()`.
pub fn parse_args() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

/// Parse an explicit argument list (argv[0] plus flags), for testing without
/// touching `std::env`.
pub fn parse_args_from<I, T>(argv: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(argv)
}
