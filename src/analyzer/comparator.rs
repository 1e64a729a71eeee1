//! Total ordering over version strings
//!
//! Comparison degrades through three strategies, each tried only when the
//! previous one is inapplicable:
//!
//! 1. semantic-version precedence
//! 2. natural string collation (digit runs compared by value)
//! 3. plain lexical comparison
//!
//! Engaging the second or third strategy is reported to the diagnostic sink.
//!
//! [`compare`] picks a strategy per pair, so it is not transitive across
//! strategies. Sorting uses [`sort_order`] instead.

use std::cmp::Ordering;

use semver::Version;

use crate::diagnostics::{DiagnosticSink, RangeWarning};
use crate::domain::version::normalize;

/// The strategy that decided a comparison.
///
/// Variants are declared in [`sort_order`] precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    Semantic,
    NaturalCollation,
    Lexical,
}

/// Outcome of a comparison together with the strategy that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub ordering: Ordering,
    pub strategy: Strategy,
}

/// Compare two version strings.
///
/// Never fails: inputs that are not semantic versions fall back to string
/// comparison and a warning is sent to `sink`.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use merge_release_notes::analyzer::comparator::compare;
/// use merge_release_notes::diagnostics::RangeWarning;
///
/// let mut warnings: Vec<RangeWarning> = Vec::new();
/// assert_eq!(compare("1.0.0-rc.1", "1.0.0", &mut warnings), Ordering::Less);
/// assert_eq!(compare("v1.0.0", "1.0.0", &mut warnings), Ordering::Equal);
/// assert!(warnings.is_empty());
/// ```
pub fn compare(a: &str, b: &str, sink: &mut dyn DiagnosticSink) -> Ordering {
    compare_detailed(a, b, sink).ordering
}

/// Like [`compare`], but also reports which strategy decided the order.
pub fn compare_detailed(a: &str, b: &str, sink: &mut dyn DiagnosticSink) -> Comparison {
    let left = normalize(a);
    let right = normalize(b);

    if let Some(ordering) = semantic_order(&left, &right) {
        return Comparison {
            ordering,
            strategy: Strategy::Semantic,
        };
    }

    sink.warn(RangeWarning::ComparatorFallback {
        left: a.to_string(),
        right: b.to_string(),
    });
    if let Some(ordering) = natural_order(&left, &right) {
        return Comparison {
            ordering,
            strategy: Strategy::NaturalCollation,
        };
    }

    sink.warn(RangeWarning::CollationFailed {
        left: a.to_string(),
        right: b.to_string(),
    });
    Comparison {
        ordering: left.cmp(&right),
        strategy: Strategy::Lexical,
    }
}

/// The strategy [`compare`] uses when `tag` meets another tag of its kind.
pub fn strategy_for(tag: &str) -> Strategy {
    let normalized = normalize(tag);
    if Version::parse(&normalized).is_ok() {
        Strategy::Semantic
    } else if normalized.chars().any(char::is_control) {
        Strategy::Lexical
    } else {
        Strategy::NaturalCollation
    }
}

/// Total order used to sort release tags.
///
/// Tags sharing a strategy compare exactly as [`compare`] does, warnings
/// included. Across strategies the order is fixed: semantic versions first,
/// then collatable tags, then the rest. A cross-strategy pair reports a
/// [`RangeWarning::ComparatorFallback`].
pub fn sort_order(a: &str, b: &str, sink: &mut dyn DiagnosticSink) -> Ordering {
    let left = strategy_for(a);
    let right = strategy_for(b);
    if left == right {
        return compare(a, b, sink);
    }

    sink.warn(RangeWarning::ComparatorFallback {
        left: a.to_string(),
        right: b.to_string(),
    });
    left.cmp(&right)
}

/// Semantic-version precedence, `None` unless both sides are valid semver.
///
/// Build metadata does not take part in precedence.
fn semantic_order(left: &str, right: &str) -> Option<Ordering> {
    let left = Version::parse(left).ok()?;
    let right = Version::parse(right).ok()?;

    Some(
        (left.major, left.minor, left.patch)
            .cmp(&(right.major, right.minor, right.patch))
            // An empty pre-release orders after any non-empty one
            .then_with(|| left.pre.cmp(&right.pre)),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Chunk<'a> {
    fn as_str(&self) -> &'a str {
        match self {
            Chunk::Digits(s) | Chunk::Text(s) => *s,
        }
    }
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (idx, ch) in s.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match in_digits {
            Some(current) if current != is_digit => {
                out.push(make_chunk(&s[start..idx], current));
                start = idx;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if let Some(current) = in_digits {
        out.push(make_chunk(&s[start..], current));
    }
    out
}

fn make_chunk(s: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Digits(s)
    } else {
        Chunk::Text(s)
    }
}

fn digits_order(x: &str, y: &str) -> Ordering {
    let x_trimmed = x.trim_start_matches('0');
    let y_trimmed = y.trim_start_matches('0');
    x_trimmed
        .len()
        .cmp(&y_trimmed.len())
        .then_with(|| x_trimmed.cmp(y_trimmed))
}

/// Natural collation: digit runs compare by numeric value, text runs compare
/// case-insensitively. Case and leading zeros only break otherwise-equal ties,
/// lowercase and shorter digit runs first.
///
/// Declines (`None`) when either side contains control characters.
fn natural_order(left: &str, right: &str) -> Option<Ordering> {
    if left.chars().chain(right.chars()).any(char::is_control) {
        return None;
    }

    let left_chunks = chunks(left);
    let right_chunks = chunks(right);
    let mut tie_break = Ordering::Equal;

    for (x, y) in left_chunks.iter().zip(right_chunks.iter()) {
        let ordering = match (x, y) {
            (Chunk::Digits(x), Chunk::Digits(y)) => {
                let ordering = digits_order(x, y);
                if ordering == Ordering::Equal && tie_break == Ordering::Equal {
                    tie_break = x.len().cmp(&y.len());
                }
                ordering
            }
            (Chunk::Text(x), Chunk::Text(y)) => {
                let ordering = x.to_lowercase().cmp(&y.to_lowercase());
                if ordering == Ordering::Equal && tie_break == Ordering::Equal {
                    tie_break = y.cmp(x);
                }
                ordering
            }
            _ => x.as_str().to_lowercase().cmp(&y.as_str().to_lowercase()),
        };

        if ordering != Ordering::Equal {
            return Some(ordering);
        }
    }

    Some(
        left_chunks
            .len()
            .cmp(&right_chunks.len())
            .then(tie_break),
    )
}
