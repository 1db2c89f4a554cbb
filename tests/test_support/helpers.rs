use super::TestResult;
use codel::{BugGame, Catalog, CompletionGame, GameConfig, GameContext};
use simple_fs::SPath;

pub const DATA_DIR: &str = "tests/data";

pub fn load_sample_catalog() -> TestResult<Catalog> {
	let catalog = Catalog::load_dir(SPath::new(DATA_DIR))?;
	Ok(catalog)
}

pub fn load_sample_context() -> TestResult<GameContext> {
	let catalog = load_sample_catalog()?;
	Ok(GameContext::new(&catalog, GameConfig::default()))
}

/// Fills the input buffers and submits.
pub fn submit_bug(game: BugGame, ctx: &GameContext, line: &str, fix: &str) -> BugGame {
	game.with_line_input(line).with_fix_input(fix).submit_guess(ctx)
}

pub fn submit_completion(game: CompletionGame, ctx: &GameContext, code: &str) -> CompletionGame {
	game.with_code_input(code).submit_guess(ctx)
}
