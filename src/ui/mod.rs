//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and the terminal diagnostic sink

use std::collections::HashSet;
use std::io::{self, Write};

use anyhow::Result;

use crate::diagnostics::{DiagnosticSink, RangeWarning};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_selected_tags, display_status, display_success, display_warning,
    format_selected_tags,
};

/// Diagnostic sink that prints every warning to stderr as it arrives.
///
/// Identical warnings are shown once; sorting compares the same pair of tags
/// more than once.
#[derive(Debug, Default)]
pub struct TerminalSink {
    seen: HashSet<RangeWarning>,
    shown: Vec<RangeWarning>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct warnings printed so far
    pub fn shown(&self) -> &[RangeWarning] {
        &self.shown
    }
}

impl DiagnosticSink for TerminalSink {
    fn warn(&mut self, warning: RangeWarning) {
        if !self.seen.insert(warning.clone()) {
            return;
        }
        display_warning(&warning);
        self.shown.push(warning);
    }
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Displays the given prompt and accepts "y" or "yes" (case-insensitive) as confirmation.
/// Default is "no" if user presses Enter.
///
/// # Arguments
/// * `prompt` - The prompt message to display (without the "(y/N): " suffix)
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, or "n"/"no")
pub fn confirm_action(prompt: &str) -> Result<bool> {
    eprint!("\n{} (y/N): ", prompt);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(is_confirmation(&input))
}

fn is_confirmation(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_confirmation() {
        assert!(is_confirmation("y\n"));
        assert!(is_confirmation(" YES "));
        assert!(!is_confirmation("\n"));
        assert!(!is_confirmation("no"));
    }

    #[test]
    fn test_terminal_sink_deduplicates() {
        let mut sink = TerminalSink::new();
        let warning = RangeWarning::ComparatorFallback {
            left: "build-7".to_string(),
            right: "build-10".to_string(),
        };
        sink.warn(warning.clone());
        sink.warn(warning);
        assert_eq!(sink.shown().len(), 1);
    }

    #[test]
    fn test_terminal_sink_keeps_first_seen_order_across_repeats() {
        let mut sink = TerminalSink::new();
        let warnings: Vec<RangeWarning> = (0..50)
            .map(|i| RangeWarning::ComparatorFallback {
                left: format!("build-{}", i),
                right: "build-x".to_string(),
            })
            .collect();
        for _ in 0..3 {
            for warning in &warnings {
                sink.warn(warning.clone());
            }
        }
        assert_eq!(sink.shown(), warnings.as_slice());
    }
}
