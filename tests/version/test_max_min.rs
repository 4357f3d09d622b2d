//! Tests for highest and lowest version selection.

use kodegen_tools_version::{VersionError, max, min};

const VERSIONS: [&str; 6] = ["29.20", "29.1", "1", "23.4345.3", "271.13.0", "invalid.version"];

#[test]
fn test_max() {
    crate::init_logging();
    assert_eq!(max(VERSIONS), Ok("271.13.0"));
}

#[test]
fn test_min() {
    crate::init_logging();
    assert_eq!(min(VERSIONS), Ok("1"));
}

#[test]
fn test_max_with_snapshot() {
    assert_eq!(max(["29.20", "29.1", "13", "200-SNAPSHOT"]), Ok("29.20"));
}

#[test]
fn test_returns_original_string() {
    assert_eq!(max(["v1.x.2", "1.1"]), Ok("v1.x.2"));
    assert_eq!(min(["1.02", "1.3"]), Ok("1.02"));
}

#[test]
fn test_owned_strings() {
    let versions: Vec<String> = VERSIONS.iter().map(|s| s.to_string()).collect();
    assert_eq!(max(versions.clone()), Ok("271.13.0".to_string()));
    assert_eq!(min(&versions).map(String::as_str), Ok("1"));
}

#[test]
fn test_empty_input() {
    crate::init_logging();
    assert_eq!(max(Vec::<&str>::new()), Err(VersionError::EmptyInput));
    assert_eq!(min(Vec::<&str>::new()), Err(VersionError::EmptyInput));
}

#[test]
fn test_no_valid_version() {
    crate::init_logging();
    assert_eq!(max(["a.b", "x-y"]), Err(VersionError::NoValidVersion));
    assert_eq!(min(["a.b", "x-y"]), Err(VersionError::NoValidVersion));
}

#[test]
fn test_ties_follow_input_order() {
    // "1.0" and "01.00" parse to the same version
    assert_eq!(max(["1.0", "01.00", "0.9"]), Ok("01.00"));
    assert_eq!(min(["1.0", "01.00", "2"]), Ok("1.0"));
}

#[test]
fn test_trailing_zero_beats_absent_component() {
    assert_eq!(max(["1.2", "1.2.0"]), Ok("1.2.0"));
    assert_eq!(min(["1.2.0", "1.2"]), Ok("1.2"));
}
