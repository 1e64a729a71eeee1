use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Release;
use crate::error::{ReleaseNotesError, Result};
use crate::github::{ReleaseSource, RepoIdentity};

/// Mock release source for testing without network access
pub struct MockReleaseSource {
    releases: Vec<Release>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockReleaseSource {
    /// Create a source that returns `releases` on every fetch
    pub fn new(releases: Vec<Release>) -> Self {
        MockReleaseSource {
            releases,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a source whose fetches fail with an API error carrying `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockReleaseSource {
            releases: Vec::new(),
            failure: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockReleaseSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ReleaseSource for MockReleaseSource {
    async fn fetch_releases(&self, _repo: &RepoIdentity) -> Result<Vec<Release>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(ReleaseNotesError::api(503, message.clone())),
            // Drafts are removed the same way the real client does it
            None => Ok(self
                .releases
                .iter()
                .filter(|release| !release.draft)
                .cloned()
                .collect()),
        }
    }
}
