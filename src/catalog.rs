use crate::normalize::strip_all_whitespace;
use crate::{BugPuzzle, CompletionPuzzle, Error, Result};
use simple_fs::{SPath, read_to_string};
use tracing::{debug, info};

pub const BUG_PUZZLES_FILE: &str = "find-the-bug.json";
pub const COMPLETION_PUZZLES_FILE: &str = "complete-the-code.json";

/// The immutable puzzle set for both modes, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	bug_puzzles: Vec<BugPuzzle>,
	completion_puzzles: Vec<CompletionPuzzle>,
}

impl Catalog {
	/// Builds a catalog from already parsed records, validating them.
	pub fn new(bug_puzzles: Vec<BugPuzzle>, completion_puzzles: Vec<CompletionPuzzle>) -> Result<Self> {
		for puzzle in &bug_puzzles {
			validate_bug_puzzle(puzzle)?;
		}
		for puzzle in &completion_puzzles {
			if puzzle.lines.is_empty() {
				return Err(Error::invalid_puzzle(puzzle.id, "completion puzzle has no target lines"));
			}
		}

		info!(
			target: "codel::catalog",
			bug_puzzles = bug_puzzles.len(),
			completion_puzzles = completion_puzzles.len(),
			"Catalog loaded"
		);

		Ok(Self {
			bug_puzzles,
			completion_puzzles,
		})
	}

	/// Parses both JSON arrays (camelCase records).
	pub fn from_json(bug_json: &str, completion_json: &str) -> Result<Self> {
		let bug_puzzles: Vec<BugPuzzle> = serde_json::from_str(bug_json)?;
		let completion_puzzles: Vec<CompletionPuzzle> = serde_json::from_str(completion_json)?;
		Self::new(bug_puzzles, completion_puzzles)
	}

	/// Loads `find-the-bug.json` and `complete-the-code.json` from `data_dir`.
	pub fn load_dir(data_dir: impl Into<SPath>) -> Result<Self> {
		let data_dir = data_dir.into();
		let bug_json = read_catalog_file(&data_dir.join(BUG_PUZZLES_FILE))?;
		let completion_json = read_catalog_file(&data_dir.join(COMPLETION_PUZZLES_FILE))?;
		Self::from_json(&bug_json, &completion_json)
	}

	pub fn bug_puzzles(&self) -> &[BugPuzzle] {
		&self.bug_puzzles
	}

	pub fn completion_puzzles(&self) -> &[CompletionPuzzle] {
		&self.completion_puzzles
	}
}

// region:    --- Support

fn read_catalog_file(path: &SPath) -> Result<String> {
	if !path.exists() {
		return Err(Error::catalog_file_not_found(path.to_string()));
	}
	Ok(read_to_string(path)?)
}

fn validate_bug_puzzle(puzzle: &BugPuzzle) -> Result<()> {
	if puzzle.buggy_lines.is_empty() {
		return Err(Error::invalid_puzzle(puzzle.id, "bug puzzle has no buggy lines"));
	}
	// a blank target would make every guess contain it
	if puzzle.fixed_lines.iter().all(|l| strip_all_whitespace(l).is_empty()) {
		return Err(Error::invalid_puzzle(puzzle.id, "bug puzzle has no fixed lines"));
	}
	if puzzle.bug_line_number < 1 || puzzle.bug_line_number > puzzle.buggy_lines.len() {
		return Err(Error::invalid_puzzle(
			puzzle.id,
			format!(
				"bugLineNumber {} out of range 1..={}",
				puzzle.bug_line_number,
				puzzle.buggy_lines.len()
			),
		));
	}
	if puzzle.fixed_lines.len() != puzzle.buggy_lines.len() {
		debug!(
			target: "codel::catalog",
			puzzle_id = puzzle.id,
			buggy = puzzle.buggy_lines.len(),
			fixed = puzzle.fixed_lines.len(),
			"buggy/fixed line counts differ"
		);
	}
	Ok(())
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
