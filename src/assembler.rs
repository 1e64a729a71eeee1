//! Renders selected releases into one Markdown document

use chrono::{DateTime, Utc};

use crate::analyzer::{OrderedReleaseSet, Selection};
use crate::domain::{Release, VersionRange};

/// Sentence produced instead of a document when no release is in range.
///
/// Downstream consumers detect the empty case by this exact text.
pub fn empty_message(range: &VersionRange) -> String {
    format!(
        "No releases found between {} (exclusive) and {} (inclusive).",
        range.start, range.end
    )
}

/// Render an ordered release set.
///
/// Output only depends on the inputs; `now` is printed as the generation time.
pub fn render(
    set: &OrderedReleaseSet,
    range: &VersionRange,
    repo_identity: &str,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Release notes for {}\n\n", repo_identity));
    out.push_str(&format!(
        "Releases after {} up to and including {} ({} total).\n\n",
        range.start,
        range.end,
        set.len()
    ));
    out.push_str(&format!(
        "_Generated {}_\n",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for release in set {
        out.push('\n');
        render_release(&mut out, release);
    }

    out
}

/// Render either the document or the informational sentence.
pub fn render_selection(
    selection: &Selection,
    range: &VersionRange,
    repo_identity: &str,
    now: DateTime<Utc>,
) -> String {
    match selection {
        Selection::Found(set) => render(set, range, repo_identity, now),
        Selection::Empty => empty_message(range),
    }
}

fn render_release(out: &mut String, release: &Release) {
    out.push_str(&format!("## {}\n\n", release.title));
    out.push_str(&format!("- Tag: `{}`\n", release.tag));
    match release.published_at {
        Some(published_at) => {
            out.push_str(&format!("- Published: {}\n", published_at.format("%Y-%m-%d")))
        }
        None => out.push_str("- Published: unknown\n"),
    }
    if release.prerelease {
        out.push_str("- Pre-release\n");
    }
    out.push('\n');

    let body = release.body.trim();
    if body.is_empty() {
        out.push_str("_No release notes provided._\n");
    } else {
        out.push_str(body);
        out.push('\n');
    }
}
