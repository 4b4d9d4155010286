//! Error types for pagemd.

use thiserror::Error;

/// Result type alias for pagemd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied option is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The page source failed to produce input for a page it was asked
    /// to render.
    #[error("Failed to extract page {page}: {message}")]
    PageExtract {
        /// Zero-based index of the failing page.
        page: usize,
        /// Description of the underlying failure.
        message: String,
    },
}
