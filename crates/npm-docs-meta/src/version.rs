use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MetaError, MetaResult};

static SHORT_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+){2})").expect("short version pattern is valid"));

/// Extract the leading `major.minor.patch` from `version`.
///
/// Pre-release and build suffixes are dropped: `"1.23.456-beta.1+build9"`
/// becomes `"1.23.456"`.
pub fn short_version(version: &str) -> MetaResult<String> {
    SHORT_VERSION
        .captures(version)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| MetaError::InvalidVersion(version.to_string()))
}
