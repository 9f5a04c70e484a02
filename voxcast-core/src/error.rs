//! Error types for voxcast

use thiserror::Error;

/// Main error type for voxcast operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid parameter domain: [{tmin}, {tmax}]")]
    InvalidDomain { tmin: f64, tmax: f64 },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result type alias for voxcast operations
pub type Result<T> = std::result::Result<T, Error>;
