use crate::BugPuzzle;

/// The ordered bug-mode level list: ascending difficulty, then ascending id, capped.
///
/// Built once from the catalog and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct BugLevels {
	levels: Vec<BugPuzzle>,
}

impl BugLevels {
	pub fn new(puzzles: &[BugPuzzle], max_levels: usize) -> Self {
		let mut levels = puzzles.to_vec();
		levels.sort_by_key(|p| (p.difficulty, p.id));
		levels.truncate(max_levels);
		Self { levels }
	}

	pub fn len(&self) -> usize {
		self.levels.len()
	}

	pub fn is_empty(&self) -> bool {
		self.levels.is_empty()
	}

	pub fn get(&self, level: usize) -> Option<&BugPuzzle> {
		self.levels.get(level)
	}

	pub fn is_last(&self, level: usize) -> bool {
		level + 1 >= self.levels.len()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, BugPuzzle> {
		self.levels.iter()
	}
}

impl<'a> IntoIterator for &'a BugLevels {
	type Item = &'a BugPuzzle;
	type IntoIter = std::slice::Iter<'a, BugPuzzle>;

	fn into_iter(self) -> Self::IntoIter {
		self.levels.iter()
	}
}

// region:    --- Tests


// endregion: --- Tests
