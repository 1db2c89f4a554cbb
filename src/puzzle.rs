use crate::normalize::{normalize_for_comparison, normalize_line};
use serde::{Deserialize, Serialize};

/// Puzzle difficulty. Ordering is the level sequencing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
	Easy,
	Medium,
	Hard,
}

/// A "find the bug" puzzle: a flawed snippet, the defective line, and the corrected snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugPuzzle {
	pub id: u32,
	pub title: String,
	pub language: String,
	pub difficulty: Difficulty,
	pub hint: String,
	#[serde(default)]
	pub hints: Option<Vec<String>>,
	#[serde(default)]
	pub goal: Option<String>,
	pub buggy_lines: Vec<String>,
	/// 1-based index into `buggy_lines`.
	pub bug_line_number: usize,
	pub fixed_lines: Vec<String>,
	pub explanation: String,
	#[serde(default)]
	pub valid_fixes: Option<Vec<String>>,
}

/// A "complete the code" puzzle. `lines` is the target the player reproduces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionPuzzle {
	pub id: u32,
	pub title: String,
	pub language: String,
	pub difficulty: Difficulty,
	pub hint: String,
	pub lines: Vec<String>,
}

impl BugPuzzle {
	/// Zero-based index of the defective line. A `bug_line_number` of 0 maps to 0.
	pub fn bug_line_index(&self) -> usize {
		self.bug_line_number.saturating_sub(1)
	}

	/// Corrected lines (comparison-normalized) that differ from the buggy line at the same index.
	///
	/// A missing or blank buggy line counts as changed.
	pub fn changed_lines(&self) -> Vec<String> {
		self.fixed_lines
			.iter()
			.enumerate()
			.filter_map(|(idx, line)| {
				let fixed = normalize_for_comparison(line);
				let buggy = self.buggy_lines.get(idx).map(|l| normalize_for_comparison(l)).unwrap_or_default();
				(buggy.is_empty() || buggy != fixed).then_some(fixed)
			})
			.collect()
	}

	/// Trimmed corrected lines to highlight when the answer is revealed.
	///
	/// Uses the stricter trailing-whitespace comparison, so an indentation-only change is highlighted.
	pub fn fix_highlights(&self) -> Vec<String> {
		self.fixed_lines
			.iter()
			.enumerate()
			.filter_map(|(idx, line)| {
				let changed = match self.buggy_lines.get(idx) {
					Some(buggy) if !buggy.is_empty() => normalize_line(buggy) != normalize_line(line),
					_ => true,
				};
				let trimmed = line.trim();
				(changed && !trimmed.is_empty()).then(|| trimmed.to_string())
			})
			.collect()
	}

	/// Ordered hints. Falls back to hint, line pointer, then explanation when none are declared.
	pub fn hints(&self) -> Vec<String> {
		match &self.hints {
			Some(hints) if !hints.is_empty() => hints.clone(),
			_ => vec![
				self.hint.clone(),
				format!("Take a closer look at line {}.", self.bug_line_number),
				self.explanation.clone(),
			],
		}
	}

	pub fn goal(&self) -> Option<&str> {
		self.goal.as_deref()
	}

	pub fn valid_fixes(&self) -> &[String] {
		self.valid_fixes.as_deref().unwrap_or_default()
	}
}

impl CompletionPuzzle {
	pub fn hints(&self) -> Vec<String> {
		vec![self.hint.clone()]
	}
}

// region:    --- Tests


// endregion: --- Tests
