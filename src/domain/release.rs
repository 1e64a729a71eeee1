use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published release as reported by the release source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag: String,
    pub title: String,
    pub body: String,
    pub published_at: Option<DateTime<Utc>>,
    pub prerelease: bool,
    pub draft: bool,
}

impl Release {
    /// Create a published, non-prerelease release with only a tag set
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Release {
            title: tag.clone(),
            tag,
            body: String::new(),
            published_at: None,
            prerelease: false,
            draft: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }
}
