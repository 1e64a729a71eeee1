//! Version string normalization

use lazy_static::lazy_static;
use regex::Regex;
use semver::Version;

lazy_static! {
    /// Loose numeric form: MAJOR[.MINOR[.PATCH]][-PRE][+BUILD] without leading zeros
    static ref LOOSE_VERSION: Regex = Regex::new(
        r"^(0|[1-9][0-9]*)(?:\.(0|[1-9][0-9]*))?(?:\.(0|[1-9][0-9]*))?(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$"
    )
    .expect("loose version pattern is valid");
}

/// Canonicalize a version string into a comparable form.
///
/// Strips surrounding whitespace and one leading `v`/`V`, then:
/// - returns the canonical semver rendering if the rest is strict semver
/// - fills missing components of loose numeric forms (`"1.2"` -> `"1.2.0"`)
/// - otherwise returns the input unchanged
///
/// Normalizing an already-normalized value returns it unchanged.
///
/// # Example
/// ```
/// use merge_release_notes::domain::version::normalize;
///
/// assert_eq!(normalize("v18.2.0"), "18.2.0");
/// assert_eq!(normalize("1.2"), "1.2.0");
/// assert_eq!(normalize("release-7"), "release-7");
/// ```
pub fn normalize(version: &str) -> String {
    let trimmed = version.trim();
    let clean = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    if let Ok(parsed) = Version::parse(clean) {
        return parsed.to_string();
    }

    match coerce_loose(clean) {
        Some(coerced) => coerced.to_string(),
        None => version.to_string(),
    }
}

/// Parse the normalized form of `version` as a strict semantic version.
pub fn parse_semver(version: &str) -> Option<Version> {
    Version::parse(&normalize(version)).ok()
}

/// Whether `version` has a strict semantic-version interpretation.
pub fn is_strict_semver(version: &str) -> bool {
    parse_semver(version).is_some()
}

fn coerce_loose(clean: &str) -> Option<Version> {
    let caps = LOOSE_VERSION.captures(clean)?;

    let major = caps.get(1)?.as_str();
    let minor = caps.get(2).map_or("0", |m| m.as_str());
    let patch = caps.get(3).map_or("0", |m| m.as_str());
    let pre = caps.get(4).map_or("", |m| m.as_str());
    let build = caps.get(5).map_or("", |m| m.as_str());

    // Oversized components and malformed identifiers are rejected here
    Version::parse(&format!("{}.{}.{}{}{}", major, minor, patch, pre, build)).ok()
}
