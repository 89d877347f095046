//! Command-line surface: argument parsing and logging configuration.

pub mod args;
pub mod constants;

pub use args::{parse_args, parse_args_from, Cli, PaletteName};
