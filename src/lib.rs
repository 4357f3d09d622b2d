//! `kodegen_tools_version` - dot-separated version parsing and selection
//!
//! This library parses version strings such as `"23.4345.3"` into their
//! numeric components, compares them, and picks the maximum, minimum or a
//! specific version out of a list of candidate strings. Every operation is
//! a pure function; nothing is cached or shared between calls.

// Module declarations
pub mod version;

// Re-export version types
pub use version::{EmptyVersionError, ParsedVersion};

// Re-export error types
pub use version::{VersionError, VersionResult};

// Re-export version operations
pub use version::{compare, locate, max, min, parse};
