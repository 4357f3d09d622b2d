//! Parsed version type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::{compare, parse};

/// Returned when a version would be built from zero components
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("version has no numeric components")]
pub struct EmptyVersionError;

/// Numeric components of a dot-separated version, most significant first.
///
/// Never empty: a string with no numeric segment has no `ParsedVersion`
/// at all, which keeps `"0.0.0"` distinct from garbage input.
///
/// Equality is element-wise, so `1.2` and `1.2.0` are different versions,
/// and ordering follows [`compare`](crate::compare).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<u64>", into = "Vec<u64>")
)]
pub struct ParsedVersion {
    components: Vec<u64>,
}

impl ParsedVersion {
    /// Build a version from raw components, `None` if there are none.
    pub fn new(components: Vec<u64>) -> Option<Self> {
        if components.is_empty() {
            None
        } else {
            Some(Self { components })
        }
    }

    /// Parse a version string. See [`parse`](crate::parse).
    pub fn parse(version: &str) -> Option<Self> {
        parse::parse(version)
    }

    /// Numeric components, most significant first
    #[inline]
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Number of components (always at least one)
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }
}

impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::compare(self, other)
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.components.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}

impl FromStr for ParsedVersion {
    type Err = EmptyVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s).ok_or(EmptyVersionError)
    }
}

impl TryFrom<Vec<u64>> for ParsedVersion {
    type Error = EmptyVersionError;

    fn try_from(components: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(components).ok_or(EmptyVersionError)
    }
}

impl From<ParsedVersion> for Vec<u64> {
    fn from(version: ParsedVersion) -> Self {
        version.components
    }
}

impl AsRef<[u64]> for ParsedVersion {
    fn as_ref(&self) -> &[u64] {
        &self.components
    }
}
