//! Error types for rs-readability.
//!
//! Extraction itself never fails: a page without a usable article yields an
//! empty [`crate::Article`]. Errors only come from configuration (a keyword
//! pattern that does not compile) and from the I/O around the library.

/// Error type for configuration and I/O around extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A keyword pattern override failed to compile.
    #[error("invalid {kind} pattern: {source}")]
    InvalidPattern {
        /// Which pattern was being replaced.
        kind: crate::patterns::PatternKind,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Reading the input document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a result failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for rs-readability operations.
pub type Result<T> = std::result::Result<T, Error>;
