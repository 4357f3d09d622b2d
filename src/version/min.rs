//! Lowest version selection.

use crate::version::candidate::{collect_candidates, sort_candidates};
use crate::version::{VersionError, VersionResult};

/// Return the item holding the lowest version.
///
/// Unparsable items are ignored. Among items that parse to the same
/// version, the one appearing first in the input wins.
///
/// # Errors
///
/// `EmptyInput` if `versions` is empty, `NoValidVersion` if none of them
/// parse.
pub fn min<I, S>(versions: I) -> VersionResult<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = collect_candidates(versions)?;
    sort_candidates(&mut candidates);

    candidates
        .into_iter()
        .next()
        .map(|candidate| candidate.source)
        .ok_or(VersionError::NoValidVersion)
}
