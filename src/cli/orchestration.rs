//! Main workflow orchestration logic
//!
//! Keeps the merge workflow separate from CLI argument parsing so it can be
//! driven programmatically against any [ReleaseSource].

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analyzer::{select, Selection};
use crate::assembler::{empty_message, render};
use crate::config::ReleasesConfig;
use crate::diagnostics::DiagnosticSink;
use crate::domain::VersionRange;
use crate::error::Result;
use crate::github::{ReleaseSource, RepoIdentity};

/// Arguments for the merge workflow
///
/// Mirrors the CLI arguments once the repository reference has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeWorkflowArgs {
    /// Repository whose releases are merged
    pub repository: RepoIdentity,

    /// Range of versions to merge, `(start, end]`
    pub range: VersionRange,

    /// Generation time printed in the document
    pub now: DateTime<Utc>,
}

/// Result of a successful merge workflow
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Merged document and the tags it contains, in merge order
    Rendered {
        document: String,
        tags: Vec<String>,
    },

    /// No release in range; carries the informational sentence
    Empty { message: String },
}

impl WorkflowOutcome {
    /// Text to hand to the output destination
    pub fn text(&self) -> &str {
        match self {
            WorkflowOutcome::Rendered { document, .. } => document,
            WorkflowOutcome::Empty { message } => message,
        }
    }

    pub fn release_count(&self) -> usize {
        match self {
            WorkflowOutcome::Rendered { tags, .. } => tags.len(),
            WorkflowOutcome::Empty { .. } => 0,
        }
    }

    /// Write the text, terminated by exactly one newline
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let text = self.text();
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

/// Main merge workflow
///
/// 1. Validate the version range (before any network access)
/// 2. Fetch releases from the source
/// 3. Drop pre-releases if configured to
/// 4. Select and order releases in range
/// 5. Render the document, or the informational sentence when empty
///
/// # Arguments
///
/// * `args` - Repository, range and generation time
/// * `releases_config` - Release filtering options
/// * `source` - Where releases are fetched from
/// * `sink` - Receives non-fatal warnings
///
/// # Returns
///
/// The rendered outcome, or the first error from validation or the source
pub async fn run_merge_workflow<S: ReleaseSource>(
    args: &MergeWorkflowArgs,
    releases_config: &ReleasesConfig,
    source: &S,
    sink: &mut dyn DiagnosticSink,
) -> Result<WorkflowOutcome> {
    args.range.validate(sink)?;

    let mut releases = source.fetch_releases(&args.repository).await?;
    if !releases_config.include_prereleases {
        releases.retain(|release| !release.prerelease);
    }
    debug!(
        repository = %args.repository,
        candidates = releases.len(),
        range = %args.range,
        "selecting releases"
    );

    match select(releases, &args.range, sink) {
        Selection::Found(set) => {
            let document = render(&set, &args.range, &args.repository.to_string(), args.now);
            let tags = set.tags().into_iter().map(str::to_string).collect();
            Ok(WorkflowOutcome::Rendered { document, tags })
        }
        Selection::Empty => Ok(WorkflowOutcome::Empty {
            message: empty_message(&args.range),
        }),
    }
}
