use crate::Result;
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_MAX_TRIES: usize = 6;
pub const DEFAULT_MAX_BUG_LEVELS: usize = 15;

/// Game limits. Read once at startup.
///
/// TOML example (missing keys take defaults):
///
/// ```toml
/// max_tries = 6
/// max_bug_levels = 15
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
	/// Guesses allowed per puzzle attempt, in both modes.
	pub max_tries: usize,
	/// Cap on the number of bug levels exposed.
	pub max_bug_levels: usize,
}

impl Default for GameConfig {
	fn default() -> Self {
		Self {
			max_tries: DEFAULT_MAX_TRIES,
			max_bug_levels: DEFAULT_MAX_BUG_LEVELS,
		}
	}
}

impl GameConfig {
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: GameConfig = toml::from_str(content)?;
		info!(
			target: "codel::config",
			max_tries = config.max_tries,
			max_bug_levels = config.max_bug_levels,
			"Loaded game config (TOML)"
		);
		Ok(config)
	}

	pub fn with_max_tries(mut self, max_tries: usize) -> Self {
		self.max_tries = max_tries;
		self
	}

	pub fn with_max_bug_levels(mut self, max_bug_levels: usize) -> Self {
		self.max_bug_levels = max_bug_levels;
		self
	}
}

// region:    --- Tests


// endregion: --- Tests
