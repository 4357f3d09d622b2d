//! Version membership test.

use crate::version::{ParsedVersion, parse};

/// Whether any item in `versions` parses to exactly `target`.
///
/// Matching is element-wise, so `1.2` does not match `1.2.0`. Unparsable
/// items never match.
pub fn locate<I, S>(target: &ParsedVersion, versions: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    versions
        .into_iter()
        .filter_map(|v| parse::parse(v.as_ref()))
        .any(|version| version == *target)
}
