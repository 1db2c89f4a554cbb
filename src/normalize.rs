//! Line canonicalization used by both guess evaluators.
//!
//! Three comparison granularities, strict to loose:
//! - `normalize_line`: trailing whitespace removed, everything else kept.
//! - `normalize_for_comparison`: whitespace runs collapsed to one space, ends trimmed.
//! - `strip_all_whitespace`: no whitespace at all.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Removes trailing whitespace only. Leading indentation, internal spacing and casing are kept.
pub fn normalize_line(s: &str) -> &str {
	s.trim_end()
}

/// Splits `text` on `\n`, normalizes each line, and drops blank lines at both ends.
///
/// Internal blank lines are preserved.
pub fn normalize_lines(text: &str) -> Vec<String> {
	let parts: Vec<&str> = text.split('\n').map(normalize_line).collect();

	let start = parts.iter().position(|l| !l.is_empty()).unwrap_or(parts.len());
	let end = parts.iter().rposition(|l| !l.is_empty()).map(|i| i + 1).unwrap_or(start);

	parts[start..end].iter().map(|l| l.to_string()).collect()
}

/// Collapses any whitespace run to a single space and trims both ends.
pub fn normalize_for_comparison(s: &str) -> String {
	RE_WHITESPACE.replace_all(normalize_line(s), " ").trim().to_string()
}

/// Removes every whitespace character.
pub fn strip_all_whitespace(s: &str) -> String {
	RE_WHITESPACE.replace_all(s, "").into_owned()
}

// region:    --- Tests


// endregion: --- Tests
