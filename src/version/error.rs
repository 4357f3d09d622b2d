//! Version aggregation error types

use thiserror::Error;

/// Error types for version selection operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VersionError {
    /// The candidate list had no entries at all
    #[error("empty list of version strings")]
    EmptyInput,

    /// Every candidate failed to parse
    #[error("no valid version found")]
    NoValidVersion,
}

/// Convenience result alias for version operations
pub type VersionResult<T> = Result<T, VersionError>;
