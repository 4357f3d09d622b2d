//! Version string parsing.

use crate::version::ParsedVersion;
use log::debug;

/// Parse a dot-separated version string into its numeric components.
///
/// Each `.`-separated segment must parse as an integer in full; segments
/// that don't (`"beta"`, `"200-SNAPSHOT"`, `""`, `"-1"`) are dropped rather
/// than treated as zero. Returns `None` when no segment survives.
pub fn parse(version: &str) -> Option<ParsedVersion> {
    let components: Vec<u64> = version
        .split('.')
        .filter_map(|segment| match segment.parse::<u64>() {
            Ok(n) => Some(n),
            Err(e) => {
                debug!("Skipping segment {segment:?} of version {version:?}: {e}");
                None
            }
        })
        .collect();

    ParsedVersion::new(components)
}
