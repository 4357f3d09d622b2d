//! Version operations module
//!
//! Parsing, comparison and aggregation over dot-separated version strings.

pub mod error;
pub mod parsed;

// Re-export error types
pub use error::{VersionError, VersionResult};

// Re-export version types
pub use parsed::{EmptyVersionError, ParsedVersion};

// Version operations (internal)
pub(crate) mod candidate;
pub(crate) mod compare;
pub(crate) mod locate;
pub(crate) mod max;
pub(crate) mod min;
pub(crate) mod parse;

// Re-export operations
pub use compare::compare;
pub use locate::locate;
pub use max::max;
pub use min::min;
pub use parse::parse;
