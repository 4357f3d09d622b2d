//! Highest version selection.

use crate::version::candidate::{collect_candidates, sort_candidates};
use crate::version::{VersionError, VersionResult};

/// Return the item holding the highest version.
///
/// Unparsable items are ignored. Among items that parse to the same
/// version, the one appearing last in the input wins.
///
/// # Errors
///
/// `EmptyInput` if `versions` is empty, `NoValidVersion` if none of them
/// parse.
pub fn max<I, S>(versions: I) -> VersionResult<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = collect_candidates(versions)?;
    sort_candidates(&mut candidates);

    let highest = candidates
        .pop()
        .map(|candidate| candidate.source)
        .ok_or(VersionError::NoValidVersion)?;

    Ok(highest)
}
