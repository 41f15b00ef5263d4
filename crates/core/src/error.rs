//! Error types.

use thiserror::Error;

/// Errors that can occur during NFP computation.
#[derive(Error, Debug)]
pub enum Error {
    /// Input polygon cannot be interpreted as a region.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type for NFP operations.
pub type Result<T> = std::result::Result<T, Error>;
