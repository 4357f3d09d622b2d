//! Three-way version comparison.

use crate::version::ParsedVersion;
use std::cmp::Ordering;

/// Compare two versions component by component.
///
/// The first differing component decides. When one version is a prefix of
/// the other the longer one is greater, so `1.2 < 1.2.0 < 1.2.1`.
pub fn compare(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    a.components()
        .iter()
        .zip(b.components())
        .map(|(x, y)| x.cmp(y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}
