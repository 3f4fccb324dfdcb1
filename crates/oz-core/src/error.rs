//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they need to surface configuration problems.

use thiserror::Error;

/// Errors raised by `oz-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A timing or size parameter is out of range.  Fatal at construction
    /// time, always caught before the simulation loop starts.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `oz-core`.
pub type CoreResult<T> = Result<T, CoreError>;
