use std::fmt;

/// Which end of a version range a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Warnings raised while validating ranges and ordering versions.
/// These are non-fatal and never change a returned result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RangeWarning {
    /// A range endpoint has no strict semantic-version interpretation
    NonSemverEndpoint { endpoint: Endpoint, value: String },
    /// Semantic comparison was not possible, natural string collation used
    ComparatorFallback { left: String, right: String },
    /// Natural collation declined the inputs, plain lexical order used
    CollationFailed { left: String, right: String },
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeWarning::NonSemverEndpoint { endpoint, value } => {
                write!(
                    f,
                    "The {} version '{}' is not a valid semantic version; ordering may be unexpected",
                    endpoint, value
                )
            }
            RangeWarning::ComparatorFallback { left, right } => {
                write!(
                    f,
                    "Could not compare '{}' and '{}' as semantic versions, falling back to string comparison",
                    left, right
                )
            }
            RangeWarning::CollationFailed { left, right } => {
                write!(
                    f,
                    "String collation of '{}' and '{}' failed, falling back to plain lexical comparison",
                    left, right
                )
            }
        }
    }
}

/// Receiver for advisory warnings.
///
/// The comparator, validator and selector take a sink explicitly instead of
/// printing, so callers decide where warnings go and tests can inspect them.
pub trait DiagnosticSink {
    fn warn(&mut self, warning: RangeWarning);
}

impl DiagnosticSink for Vec<RangeWarning> {
    fn warn(&mut self, warning: RangeWarning) {
        self.push(warning);
    }
}

/// Sink that drops every warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreWarnings;

impl DiagnosticSink for IgnoreWarnings {
    fn warn(&mut self, _warning: RangeWarning) {}
}
