use std::cmp::Ordering;
use std::fmt;

use crate::analyzer::comparator::compare;
use crate::diagnostics::{DiagnosticSink, Endpoint, RangeWarning};
use crate::domain::version::is_strict_semver;
use crate::error::{ReleaseNotesError, Result};

/// Version range with an exclusive start and an inclusive end: `(start, end]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub start: String,
    pub end: String,
}

impl VersionRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        VersionRange {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Check that `start` orders strictly before `end` after normalization.
    ///
    /// Must run before any releases are fetched. On success, emits a
    /// [`RangeWarning::NonSemverEndpoint`] for each endpoint without a strict
    /// semantic-version interpretation.
    ///
    /// # Returns
    /// * `Ok(())` - The range is usable
    /// * `Err(ReleaseNotesError::InvalidRange)` - `start` is equal to or after `end`
    pub fn validate(&self, sink: &mut dyn DiagnosticSink) -> Result<()> {
        // compare() normalizes both sides
        if compare(&self.start, &self.end, sink) != Ordering::Less {
            return Err(ReleaseNotesError::invalid_range(&self.start, &self.end));
        }

        if !is_strict_semver(&self.start) {
            sink.warn(RangeWarning::NonSemverEndpoint {
                endpoint: Endpoint::Start,
                value: self.start.clone(),
            });
        }
        if !is_strict_semver(&self.end) {
            sink.warn(RangeWarning::NonSemverEndpoint {
                endpoint: Endpoint::End,
                value: self.end.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}]", self.start, self.end)
    }
}
