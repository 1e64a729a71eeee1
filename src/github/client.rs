use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::GitHubConfig;
use crate::domain::Release;
use crate::error::{ReleaseNotesError, Result};
use crate::github::{ReleaseSource, RepoIdentity};

/// The API caps a single page at this many releases
pub const MAX_PER_PAGE: u32 = 100;

/// GitHub API response for a single release.
#[derive(Debug, Deserialize)]
struct GitHubRelease {
    tag_name: String,
    name: Option<String>,
    body: Option<String>,
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    prerelease: bool,
    #[serde(default)]
    draft: bool,
}

impl From<GitHubRelease> for Release {
    fn from(release: GitHubRelease) -> Self {
        let title = release
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| release.tag_name.clone());

        Release {
            tag: release.tag_name,
            title,
            body: release.body.unwrap_or_default(),
            published_at: release.published_at,
            prerelease: release.prerelease,
            draft: release.draft,
        }
    }
}

/// GitHub API error response.
#[derive(Debug, Deserialize)]
struct GitHubError {
    message: String,
}

/// Release source backed by the GitHub Releases REST API.
///
/// Fetches a single page; no authentication is sent.
pub struct GitHubClient {
    client: Client,
    api_url: String,
    per_page: u32,
    user_agent: String,
    timeout: Duration,
}

impl GitHubClient {
    /// Create a client from the `[github]` configuration section
    pub fn new(config: &GitHubConfig) -> Self {
        GitHubClient {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            per_page: config.per_page.clamp(1, MAX_PER_PAGE),
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Page size actually requested
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    fn releases_url(&self, repo: &RepoIdentity) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.api_url, repo.owner, repo.repo, self.per_page
        )
    }
}

impl ReleaseSource for GitHubClient {
    async fn fetch_releases(&self, repo: &RepoIdentity) -> Result<Vec<Release>> {
        let url = self.releases_url(repo);
        debug!(%url, "fetching releases");

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/vnd.github+json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            let message = serde_json::from_str::<GitHubError>(&error_text)
                .map(|e| e.message)
                .unwrap_or(error_text);
            return Err(ReleaseNotesError::api(status.as_u16(), message));
        }

        let releases: Vec<GitHubRelease> = response.json().await?;
        let total = releases.len();
        let published: Vec<Release> = releases
            .into_iter()
            .filter(|release| !release.draft)
            .map(Release::from)
            .collect();

        debug!(
            repository = %repo,
            total,
            published = published.len(),
            "received releases"
        );
        Ok(published)
    }
}
