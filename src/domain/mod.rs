//! Domain types - versions, ranges and release records

pub mod range;
pub mod release;
pub mod version;

pub use range::VersionRange;
pub use release::Release;
pub use version::{is_strict_semver, normalize, parse_semver};
