//! Parsed version paired with the input it came from.

use crate::version::{ParsedVersion, VersionError, VersionResult, compare, parse};
use log::{debug, warn};

/// A candidate that parsed, along with its untouched source item
pub(crate) struct VersionCandidate<S> {
    pub(crate) version: ParsedVersion,
    pub(crate) source: S,
}

/// Parse every item, keeping the ones that yield a version, in input order.
///
/// Fails with `EmptyInput` for an empty list and `NoValidVersion` when
/// nothing parses.
pub(crate) fn collect_candidates<I, S>(versions: I) -> VersionResult<Vec<VersionCandidate<S>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = 0usize;
    let candidates: Vec<VersionCandidate<S>> = versions
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(|source| {
            parse::parse(source.as_ref()).map(|version| VersionCandidate { version, source })
        })
        .collect();

    if seen == 0 {
        return Err(VersionError::EmptyInput);
    }

    if candidates.is_empty() {
        warn!("None of {seen} version strings could be parsed");
        return Err(VersionError::NoValidVersion);
    }

    debug!("Parsed {} of {seen} version strings", candidates.len());
    Ok(candidates)
}

/// Ascending order by version. Ties keep input order.
pub(crate) fn sort_candidates<S>(candidates: &mut [VersionCandidate<S>]) {
    candidates.sort_by(|a, b| compare::compare(&a.version, &b.version));
}
