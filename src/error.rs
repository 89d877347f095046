//! Crate-level error type.
//!
//! A small `enum` with a manual `Display`/`Error` impl for library-level
//! failures (no `thiserror`), with `anyhow` reserved for the CLI boundary
//! where path/context needs to be attached (see `cli` and `main.rs`).

use std::fmt;

/// Errors raised by the core render/pool machinery.
///
/// Both variants are creation-time errors: nothing is allocated or spawned
/// before the check that produces them, so callers never need to unwind
/// partially-built state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configuration value violates a documented invariant (non-positive
    /// dimension, iteration cap below 1, palette with fewer than 2 slots,
    /// split factor below 1, worker count below 1, ...).
    ConfigInvalid { reason: String },
    /// The underlying OS failed to hand out a thread or synchronization
    /// primitive.
    ResourceUnavailable { reason: String },
}

impl Error {
    pub fn config_invalid(reason: impl Into<String>) -> Self {
        Error::ConfigInvalid {
            reason: reason.into(),
        }
    }

    pub fn resource_unavailable(reason: impl Into<String>) -> Self {
        Error::ResourceUnavailable {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigInvalid { reason } => write!(f, "invalid configuration: {reason}"),
            Error::ResourceUnavailable { reason } => {
                write!(f, "resource unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
