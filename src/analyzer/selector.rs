use std::cmp::Ordering;

use crate::analyzer::comparator::{compare, sort_order};
use crate::diagnostics::DiagnosticSink;
use crate::domain::{Release, VersionRange};

/// Releases inside a range, in ascending version order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedReleaseSet {
    releases: Vec<Release>,
}

impl OrderedReleaseSet {
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.releases.iter()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Tags in merge order
    pub fn tags(&self) -> Vec<&str> {
        self.releases.iter().map(|r| r.tag.as_str()).collect()
    }

    pub fn into_releases(self) -> Vec<Release> {
        self.releases
    }
}

impl<'a> IntoIterator for &'a OrderedReleaseSet {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.releases.iter()
    }
}

/// Outcome of selecting releases for a range.
///
/// `Empty` is a valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Found(OrderedReleaseSet),
    Empty,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}

/// Select the releases in `(range.start, range.end]` and order them.
///
/// Drafts are expected to be filtered out by the release source already.
/// Sorting uses [`sort_order`], a total order even for mixed semver and
/// non-semver tags. It is stable, so releases whose tags compare equal keep
/// their input order.
///
/// # Arguments
/// * `releases` - Releases as returned by the source
/// * `range` - A range that already passed [`VersionRange::validate`]
/// * `sink` - Receives comparator fallback warnings
pub fn select(
    releases: Vec<Release>,
    range: &VersionRange,
    sink: &mut dyn DiagnosticSink,
) -> Selection {
    let mut retained: Vec<Release> = releases
        .into_iter()
        .filter(|release| {
            compare(&release.tag, &range.start, sink) == Ordering::Greater
                && compare(&release.tag, &range.end, sink) != Ordering::Greater
        })
        .collect();

    if retained.is_empty() {
        return Selection::Empty;
    }

    retained.sort_by(|a, b| sort_order(&a.tag, &b.tag, sink));
    Selection::Found(OrderedReleaseSet { releases: retained })
}
