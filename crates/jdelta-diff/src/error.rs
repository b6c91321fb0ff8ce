//! Error types for the diff crate.

use jdelta_types::Path;

/// Errors that can occur during a comparison.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The documents nest deeper than the configured limit.
    #[error("maximum depth {limit} exceeded at {path}")]
    DepthExceeded { limit: usize, path: Path },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
