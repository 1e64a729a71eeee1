//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Status goes to stdout only when the document does not; warnings and errors go to stderr.

use console::style;

use crate::diagnostics::RangeWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a range or ordering warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The warning to display
pub fn display_warning(warning: &RangeWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Format the list of selected tags, in merge order.
///
/// Shows up to 10 tags; the remainder is summarized.
pub fn format_selected_tags(tags: &[&str]) -> String {
    let mut lines = vec![format!("Merging {} release(s):", tags.len())];
    for (i, tag) in tags.iter().take(10).enumerate() {
        lines.push(format!("  {}. {}", i + 1, tag));
    }
    if tags.len() > 10 {
        lines.push(format!("  ... and {} more releases", tags.len() - 10));
    }
    lines.join("\n")
}

/// Print the selected tags to stderr.
pub fn display_selected_tags(tags: &[&str]) {
    eprintln!("{}", style(format_selected_tags(tags)).bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_selected_tags() {
        let text = format_selected_tags(&["v1.1.0", "v2.0.0"]);
        assert_eq!(text, "Merging 2 release(s):\n  1. v1.1.0\n  2. v2.0.0");
    }

    #[test]
    fn test_format_selected_tags_truncates() {
        let tags: Vec<String> = (0..12).map(|i| format!("v1.{}.0", i)).collect();
        let refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let text = format_selected_tags(&refs);
        assert!(text.contains("10. v1.9.0"));
        assert!(!text.contains("v1.10.0"));
        assert!(text.ends_with("... and 2 more releases"));
    }

    #[test]
    fn test_display_functions() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
        display_success("test success");
        display_status("test status");
    }
}
