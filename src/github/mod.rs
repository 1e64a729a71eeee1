//! Release source abstraction layer
//!
//! The workflow depends on the [ReleaseSource] trait rather than on a concrete
//! HTTP client, so it can run against canned data in tests.
//!
//! - [client::GitHubClient]: fetches releases from the GitHub REST API with `reqwest`
//! - [mock::MockReleaseSource]: returns canned releases or a canned failure

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockReleaseSource;

use std::fmt;

use regex::Regex;

use crate::domain::Release;
use crate::error::{ReleaseNotesError, Result};

/// Owner and repository name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    pub owner: String,
    pub repo: String,
}

impl RepoIdentity {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoIdentity {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Source of published releases for one repository.
///
/// Implementations return a single, already materialized page of releases
/// with drafts removed.
#[allow(async_fn_in_trait)]
pub trait ReleaseSource: Send + Sync {
    /// Fetch the releases of `repo`
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - Non-draft releases, in the order the source reports them
    /// * `Err` - If the request fails or the response cannot be read
    async fn fetch_releases(&self, repo: &RepoIdentity) -> Result<Vec<Release>>;
}

/// Resolve a repository reference into owner and repository name.
///
/// Accepts:
/// - `https://github.com/owner/repo` (optionally ending in `.git` or followed by a path)
/// - `git@github.com:owner/repo.git`
/// - `owner/repo`
///
/// # Example
/// ```
/// use merge_release_notes::github::parse_repository;
///
/// let identity = parse_repository("https://github.com/facebook/react").unwrap();
/// assert_eq!(identity.to_string(), "facebook/react");
/// ```
pub fn parse_repository(input: &str) -> Result<RepoIdentity> {
    let input = input.trim();
    let pattern = r"^(?:(?:https?://)?(?:www\.)?github\.com/|git@github\.com:)?([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?(?:/.*)?/?$";
    let re = Regex::new(pattern)
        .map_err(|e| ReleaseNotesError::repository(format!("Invalid pattern: {}", e)))?;

    let caps = re.captures(input).ok_or_else(|| {
        ReleaseNotesError::repository(format!(
            "Cannot resolve '{}' into owner/repository",
            input
        ))
    })?;

    Ok(RepoIdentity::new(&caps[1], &caps[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url() {
        let id = parse_repository("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(id, RepoIdentity::new("rust-lang", "rust"));
    }

    #[test]
    fn test_parse_https_url_with_git_suffix() {
        let id = parse_repository("https://github.com/tokio-rs/tokio.git").unwrap();
        assert_eq!(id, RepoIdentity::new("tokio-rs", "tokio"));
    }

    #[test]
    fn test_parse_url_with_trailing_path() {
        let id = parse_repository("https://github.com/facebook/react/releases").unwrap();
        assert_eq!(id, RepoIdentity::new("facebook", "react"));
    }

    #[test]
    fn test_parse_ssh_url() {
        let id = parse_repository("git@github.com:serde-rs/serde.git").unwrap();
        assert_eq!(id, RepoIdentity::new("serde-rs", "serde"));
    }

    #[test]
    fn test_parse_shorthand() {
        let id = parse_repository("clap-rs/clap").unwrap();
        assert_eq!(id, RepoIdentity::new("clap-rs", "clap"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_repository("https://gitlab.com/owner/repo").is_err());
        assert!(parse_repository("not a repository").is_err());
        assert!(parse_repository("").is_err());
    }

    #[test]
    fn test_identity_display() {
        assert_eq!(RepoIdentity::new("a", "b").to_string(), "a/b");
    }
}
