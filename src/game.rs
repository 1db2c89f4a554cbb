use crate::{BugLevels, Catalog, CompletionPuzzle, GameConfig};

/// Read-only data shared by every session: limits, the bug level list, and the completion puzzles.
#[derive(Debug, Clone, Default)]
pub struct GameContext {
	config: GameConfig,
	bug_levels: BugLevels,
	completion_puzzles: Vec<CompletionPuzzle>,
}

impl GameContext {
	pub fn new(catalog: &Catalog, config: GameConfig) -> Self {
		Self {
			config,
			bug_levels: BugLevels::new(catalog.bug_puzzles(), config.max_bug_levels),
			completion_puzzles: catalog.completion_puzzles().to_vec(),
		}
	}

	pub fn config(&self) -> &GameConfig {
		&self.config
	}

	pub fn max_tries(&self) -> usize {
		self.config.max_tries
	}

	pub fn bug_levels(&self) -> &BugLevels {
		&self.bug_levels
	}

	pub fn completion_puzzles(&self) -> &[CompletionPuzzle] {
		&self.completion_puzzles
	}

	pub fn completion_puzzle(&self, idx: usize) -> Option<&CompletionPuzzle> {
		self.completion_puzzles.get(idx)
	}
}
