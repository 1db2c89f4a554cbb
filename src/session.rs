//! Game session state for both modes.
//!
//! Every transition takes the current state by value and returns the next one.
//! A transition whose precondition does not hold returns the state unchanged,
//! `check_submission` tells the caller why a submit would be ignored.

use crate::fix_match::is_fix_guess_correct;
use crate::normalize::normalize_lines;
use crate::scoring::{LineFeedback, is_all_correct, score_guess};
use crate::{BugPuzzle, CompletionPuzzle, GameContext};
use derive_more::Display;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
	Bug,
	Completion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
	InProgress,
	Won,
	Exhausted,
}

/// Bug-mode level outcome as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
	InProgress,
	/// Won, and a next level exists.
	Won,
	/// Won the last level. No advance is possible.
	AllLevelsComplete,
	Exhausted,
}

/// Why a submission is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubmitBlock {
	#[display("no game mode selected")]
	NoActiveGame,
	#[display("no puzzle available")]
	NoPuzzle,
	#[display("game is over")]
	GameOver,
	#[display("line number is not a number in range")]
	InvalidLineNumber,
	#[display("fix is empty")]
	EmptyFix,
	#[display("guess is empty")]
	EmptyGuess,
}

/// One bug-mode submission. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugGuess {
	pub line: usize,
	pub fix: String,
	pub line_correct: bool,
	pub fix_correct: bool,
}

impl BugGuess {
	pub fn is_winning(&self) -> bool {
		self.line_correct && self.fix_correct
	}
}

// region:    --- Session

/// Top-level session: no mode selected, or one active game.
#[derive(Debug, Clone, Default)]
pub enum Session {
	#[default]
	Home,
	Bug(BugGame),
	Completion(CompletionGame),
}

impl Session {
	/// Starts a fresh game for `mode`, discarding any current state.
	pub fn select_mode(self, mode: GameMode) -> Self {
		info!(target: "codel::session", ?mode, "Game mode selected");
		match mode {
			GameMode::Bug => Session::Bug(BugGame::new(0)),
			GameMode::Completion => Session::Completion(CompletionGame::new(0)),
		}
	}

	/// Back to home. All game state is dropped.
	pub fn reset(self) -> Self {
		if !matches!(self, Session::Home) {
			info!(target: "codel::session", "Session reset");
		}
		Session::Home
	}

	pub fn mode(&self) -> Option<GameMode> {
		match self {
			Session::Home => None,
			Session::Bug(_) => Some(GameMode::Bug),
			Session::Completion(_) => Some(GameMode::Completion),
		}
	}

	pub fn status(&self, ctx: &GameContext) -> Option<GameStatus> {
		match self {
			Session::Home => None,
			Session::Bug(game) => Some(game.status(ctx)),
			Session::Completion(game) => Some(game.status(ctx)),
		}
	}

	pub fn is_game_over(&self, ctx: &GameContext) -> bool {
		self.status(ctx).is_some_and(|s| s != GameStatus::InProgress)
	}

	pub fn is_won(&self, ctx: &GameContext) -> bool {
		self.status(ctx) == Some(GameStatus::Won)
	}

	/// Sets the bug-mode line buffer. No-op outside bug mode.
	pub fn with_line_input(self, line_input: impl Into<String>) -> Self {
		match self {
			Session::Bug(game) => Session::Bug(game.with_line_input(line_input)),
			other => other,
		}
	}

	/// Sets the bug-mode fix buffer. No-op outside bug mode.
	pub fn with_fix_input(self, fix_input: impl Into<String>) -> Self {
		match self {
			Session::Bug(game) => Session::Bug(game.with_fix_input(fix_input)),
			other => other,
		}
	}

	/// Sets the completion-mode code buffer. No-op outside completion mode.
	pub fn with_code_input(self, code_input: impl Into<String>) -> Self {
		match self {
			Session::Completion(game) => Session::Completion(game.with_code_input(code_input)),
			other => other,
		}
	}

	pub fn check_submission(&self, ctx: &GameContext) -> Result<(), SubmitBlock> {
		match self {
			Session::Home => Err(SubmitBlock::NoActiveGame),
			Session::Bug(game) => game.check_submission(ctx).map(|_| ()),
			Session::Completion(game) => game.check_submission(ctx).map(|_| ()),
		}
	}

	pub fn submit_guess(self, ctx: &GameContext) -> Self {
		match self {
			Session::Home => {
				debug!(target: "codel::session", block = %SubmitBlock::NoActiveGame, "Submission ignored");
				Session::Home
			}
			Session::Bug(game) => Session::Bug(game.submit_guess(ctx)),
			Session::Completion(game) => Session::Completion(game.submit_guess(ctx)),
		}
	}

	pub fn retry(self) -> Self {
		match self {
			Session::Home => Session::Home,
			Session::Bug(game) => Session::Bug(game.retry()),
			Session::Completion(game) => Session::Completion(game.retry()),
		}
	}

	/// Only meaningful in bug mode.
	pub fn advance_level(self, ctx: &GameContext) -> Self {
		match self {
			Session::Bug(game) => Session::Bug(game.advance_level(ctx)),
			other => other,
		}
	}

	pub fn reveal_hint(self, ctx: &GameContext) -> Self {
		match self {
			Session::Home => Session::Home,
			Session::Bug(game) => Session::Bug(game.reveal_hint(ctx)),
			Session::Completion(game) => Session::Completion(game.reveal_hint(ctx)),
		}
	}

	pub fn hide_hints(self) -> Self {
		match self {
			Session::Home => Session::Home,
			Session::Bug(game) => Session::Bug(game.hide_hints()),
			Session::Completion(game) => Session::Completion(game.hide_hints()),
		}
	}
}

// endregion: --- Session

// region:    --- BugGame

/// Bug-mode state for the current level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BugGame {
	level: usize,
	guesses: Vec<BugGuess>,
	hints_revealed: usize,
	line_input: String,
	fix_input: String,
}

impl BugGame {
	pub fn new(level: usize) -> Self {
		Self {
			level,
			..Default::default()
		}
	}

	pub fn level(&self) -> usize {
		self.level
	}

	pub fn guesses(&self) -> &[BugGuess] {
		&self.guesses
	}

	pub fn line_input(&self) -> &str {
		&self.line_input
	}

	pub fn fix_input(&self) -> &str {
		&self.fix_input
	}

	pub fn with_line_input(mut self, line_input: impl Into<String>) -> Self {
		self.line_input = line_input.into();
		self
	}

	pub fn with_fix_input(mut self, fix_input: impl Into<String>) -> Self {
		self.fix_input = fix_input.into();
		self
	}

	pub fn puzzle<'c>(&self, ctx: &'c GameContext) -> Option<&'c BugPuzzle> {
		ctx.bug_levels().get(self.level)
	}

	pub fn is_won(&self) -> bool {
		self.guesses.iter().any(BugGuess::is_winning)
	}

	pub fn status(&self, ctx: &GameContext) -> GameStatus {
		if self.is_won() {
			GameStatus::Won
		} else if self.guesses.len() >= ctx.max_tries() {
			GameStatus::Exhausted
		} else {
			GameStatus::InProgress
		}
	}

	pub fn outcome(&self, ctx: &GameContext) -> LevelOutcome {
		match self.status(ctx) {
			GameStatus::InProgress => LevelOutcome::InProgress,
			GameStatus::Exhausted => LevelOutcome::Exhausted,
			GameStatus::Won if ctx.bug_levels().is_last(self.level) => LevelOutcome::AllLevelsComplete,
			GameStatus::Won => LevelOutcome::Won,
		}
	}

	pub fn is_game_over(&self, ctx: &GameContext) -> bool {
		self.status(ctx) != GameStatus::InProgress
	}

	pub fn tries_left(&self, ctx: &GameContext) -> usize {
		ctx.max_tries().saturating_sub(self.guesses.len())
	}

	/// Validates the input buffers. Returns the parsed 1-based line number.
	pub fn check_submission(&self, ctx: &GameContext) -> Result<usize, SubmitBlock> {
		let puzzle = self.puzzle(ctx).ok_or(SubmitBlock::NoPuzzle)?;
		if self.is_game_over(ctx) {
			return Err(SubmitBlock::GameOver);
		}

		let line = self
			.line_input
			.trim()
			.parse::<usize>()
			.map_err(|_| SubmitBlock::InvalidLineNumber)?;
		if line < 1 || line > puzzle.buggy_lines.len() {
			return Err(SubmitBlock::InvalidLineNumber);
		}

		if self.fix_input.trim().is_empty() {
			return Err(SubmitBlock::EmptyFix);
		}

		Ok(line)
	}

	/// Records a guess from the input buffers, then clears them.
	pub fn submit_guess(mut self, ctx: &GameContext) -> Self {
		let line = match self.check_submission(ctx) {
			Ok(line) => line,
			Err(block) => {
				debug!(target: "codel::session", level = self.level, %block, "Bug submission ignored");
				return self;
			}
		};
		let Some(puzzle) = self.puzzle(ctx) else {
			return self;
		};

		let fix = std::mem::take(&mut self.fix_input);
		let guess = BugGuess {
			line,
			line_correct: line == puzzle.bug_line_number,
			fix_correct: is_fix_guess_correct(&fix, puzzle),
			fix,
		};
		self.line_input.clear();

		debug!(
			target: "codel::session",
			level = self.level,
			puzzle_id = puzzle.id,
			line,
			line_correct = guess.line_correct,
			fix_correct = guess.fix_correct,
			"Bug guess recorded"
		);
		self.guesses.push(guess);

		match self.status(ctx) {
			GameStatus::Won => info!(target: "codel::session", level = self.level, tries = self.guesses.len(), "Bug level won"),
			GameStatus::Exhausted => info!(target: "codel::session", level = self.level, "Bug level out of tries"),
			GameStatus::InProgress => (),
		}

		self
	}

	/// Same level, clean slate.
	pub fn retry(self) -> Self {
		debug!(target: "codel::session", level = self.level, "Bug level retry");
		Self::new(self.level)
	}

	pub fn can_advance(&self, ctx: &GameContext) -> bool {
		self.outcome(ctx) == LevelOutcome::Won
	}

	/// Moves to the next level. Ignored unless the level is won and is not the last one.
	pub fn advance_level(self, ctx: &GameContext) -> Self {
		if !self.can_advance(ctx) {
			debug!(target: "codel::session", level = self.level, "Advance ignored");
			return self;
		}
		info!(target: "codel::session", from = self.level, to = self.level + 1, "Advancing bug level");
		Self::new(self.level + 1)
	}

	pub fn hints(&self, ctx: &GameContext) -> Vec<String> {
		self.puzzle(ctx).map(BugPuzzle::hints).unwrap_or_default()
	}

	pub fn hints_revealed(&self) -> usize {
		self.hints_revealed
	}

	pub fn visible_hints(&self, ctx: &GameContext) -> Vec<String> {
		self.hints(ctx).into_iter().take(self.hints_revealed).collect()
	}

	pub fn reveal_hint(mut self, ctx: &GameContext) -> Self {
		self.hints_revealed = (self.hints_revealed + 1).min(self.hints(ctx).len());
		self
	}

	pub fn hide_hints(mut self) -> Self {
		self.hints_revealed = 0;
		self
	}
}

// endregion: --- BugGame

// region:    --- CompletionGame

/// Completion-mode state for one puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionGame {
	puzzle: usize,
	guesses: Vec<String>,
	feedback: Vec<Vec<LineFeedback>>,
	hints_revealed: usize,
	code_input: String,
}

impl CompletionGame {
	pub fn new(puzzle: usize) -> Self {
		Self {
			puzzle,
			..Default::default()
		}
	}

	pub fn puzzle_index(&self) -> usize {
		self.puzzle
	}

	pub fn puzzle<'c>(&self, ctx: &'c GameContext) -> Option<&'c CompletionPuzzle> {
		ctx.completion_puzzle(self.puzzle)
	}

	/// Raw submitted texts, in order.
	pub fn guesses(&self) -> &[String] {
		&self.guesses
	}

	/// One feedback row per submitted guess.
	pub fn feedback(&self) -> &[Vec<LineFeedback>] {
		&self.feedback
	}

	pub fn code_input(&self) -> &str {
		&self.code_input
	}

	pub fn with_code_input(mut self, code_input: impl Into<String>) -> Self {
		self.code_input = code_input.into();
		self
	}

	/// Last feedback all correct, and the last guess has as many lines as the target.
	pub fn is_won(&self, ctx: &GameContext) -> bool {
		let (Some(puzzle), Some(last_fb), Some(last_guess)) =
			(self.puzzle(ctx), self.feedback.last(), self.guesses.last())
		else {
			return false;
		};
		is_all_correct(last_fb) && normalize_lines(last_guess).len() == puzzle.lines.len()
	}

	pub fn status(&self, ctx: &GameContext) -> GameStatus {
		if self.is_won(ctx) {
			GameStatus::Won
		} else if self.guesses.len() >= ctx.max_tries() {
			GameStatus::Exhausted
		} else {
			GameStatus::InProgress
		}
	}

	pub fn is_game_over(&self, ctx: &GameContext) -> bool {
		self.status(ctx) != GameStatus::InProgress
	}

	pub fn tries_left(&self, ctx: &GameContext) -> usize {
		ctx.max_tries().saturating_sub(self.guesses.len())
	}

	/// Validates the input buffer. Returns the normalized guess lines.
	pub fn check_submission(&self, ctx: &GameContext) -> Result<Vec<String>, SubmitBlock> {
		self.puzzle(ctx).ok_or(SubmitBlock::NoPuzzle)?;
		if self.is_game_over(ctx) {
			return Err(SubmitBlock::GameOver);
		}

		let lines = normalize_lines(&self.code_input);
		if lines.is_empty() {
			return Err(SubmitBlock::EmptyGuess);
		}

		Ok(lines)
	}

	/// Scores the input buffer against the target, records it, then clears the buffer.
	pub fn submit_guess(mut self, ctx: &GameContext) -> Self {
		let lines = match self.check_submission(ctx) {
			Ok(lines) => lines,
			Err(block) => {
				debug!(target: "codel::session", puzzle = self.puzzle, %block, "Completion submission ignored");
				return self;
			}
		};
		let Some(puzzle) = self.puzzle(ctx) else {
			return self;
		};

		let feedback = score_guess(&lines, &puzzle.lines);
		debug!(
			target: "codel::session",
			puzzle_id = puzzle.id,
			lines = lines.len(),
			all_correct = is_all_correct(&feedback),
			"Completion guess scored"
		);
		self.guesses.push(std::mem::take(&mut self.code_input));
		self.feedback.push(feedback);

		match self.status(ctx) {
			GameStatus::Won => info!(target: "codel::session", puzzle = self.puzzle, tries = self.guesses.len(), "Completion puzzle won"),
			GameStatus::Exhausted => info!(target: "codel::session", puzzle = self.puzzle, "Completion puzzle out of tries"),
			GameStatus::InProgress => (),
		}

		self
	}

	pub fn retry(self) -> Self {
		debug!(target: "codel::session", puzzle = self.puzzle, "Completion retry");
		Self::new(self.puzzle)
	}

	pub fn hints(&self, ctx: &GameContext) -> Vec<String> {
		self.puzzle(ctx).map(CompletionPuzzle::hints).unwrap_or_default()
	}

	pub fn hints_revealed(&self) -> usize {
		self.hints_revealed
	}

	pub fn visible_hints(&self, ctx: &GameContext) -> Vec<String> {
		self.hints(ctx).into_iter().take(self.hints_revealed).collect()
	}

	pub fn reveal_hint(mut self, ctx: &GameContext) -> Self {
		self.hints_revealed = (self.hints_revealed + 1).min(self.hints(ctx).len());
		self
	}

	pub fn hide_hints(mut self) -> Self {
		self.hints_revealed = 0;
		self
	}
}

// endregion: --- CompletionGame

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use crate::{Catalog, Difficulty, GameConfig};

	fn bug_puzzle(id: u32, difficulty: Difficulty) -> BugPuzzle {
		BugPuzzle {
			id,
			title: format!("bug {id}"),
			language: "javascript".into(),
			difficulty,
			hint: "Look at the condition".into(),
			hints: None,
			goal: None,
			buggy_lines: vec!["let i=0".into(), "if(i=1)".into(), "return i".into()],
			bug_line_number: 2,
			fixed_lines: vec!["let i=0".into(), "if(i==1)".into(), "return i".into()],
			explanation: "Assignment is not comparison.".into(),
			valid_fixes: None,
		}
	}

	fn completion_puzzle() -> CompletionPuzzle {
		CompletionPuzzle {
			id: 1,
			title: "Double".into(),
			language: "javascript".into(),
			difficulty: Difficulty::Easy,
			hint: "Multiply by two".into(),
			lines: vec!["function f(x){".into(), "return x*2;".into(), "}".into()],
		}
	}

	fn ctx() -> Result<GameContext> {
		let catalog = Catalog::new(
			vec![bug_puzzle(2, Difficulty::Medium), bug_puzzle(1, Difficulty::Easy)],
			vec![completion_puzzle()],
		)?;
		Ok(GameContext::new(&catalog, GameConfig::default()))
	}

	#[test]
	fn test_session_bug_win() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let game = BugGame::new(0).with_line_input("2").with_fix_input("if(i==1)");

		// -- Exec
		let game = game.submit_guess(&ctx);

		// -- Check
		let guess = &game.guesses()[0];
		assert!(guess.line_correct && guess.fix_correct);
		assert_eq!(game.status(&ctx), GameStatus::Won);
		assert_eq!(game.outcome(&ctx), LevelOutcome::Won);
		assert_eq!(game.line_input(), "");
		assert_eq!(game.fix_input(), "");

		Ok(())
	}

	#[test]
	fn test_session_bug_blocked_inputs() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let cases = [
			("abc", "fix", SubmitBlock::InvalidLineNumber),
			("0", "fix", SubmitBlock::InvalidLineNumber),
			("4", "fix", SubmitBlock::InvalidLineNumber),
			("", "fix", SubmitBlock::InvalidLineNumber),
			("2", "   \n ", SubmitBlock::EmptyFix),
		];

		for (line, fix, expected) in cases {
			// -- Exec
			let game = BugGame::new(0).with_line_input(line).with_fix_input(fix);
			let block = game.check_submission(&ctx);
			let after = game.clone().submit_guess(&ctx);

			// -- Check
			assert_eq!(block, Err(expected), "line {line:?} fix {fix:?}");
			assert_eq!(after, game, "blocked submission must not change state");
		}

		Ok(())
	}

	#[test]
	fn test_session_bug_exhaustion() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let mut game = BugGame::new(0);

		// -- Exec
		for _ in 0..6 {
			game = game.with_line_input("1").with_fix_input("if(i==1)").submit_guess(&ctx);
		}
		let extra = game.clone().with_line_input("2").with_fix_input("if(i==1)").submit_guess(&ctx);

		// -- Check
		assert_eq!(game.guesses().len(), 6);
		assert_eq!(game.status(&ctx), GameStatus::Exhausted);
		assert_eq!(game.tries_left(&ctx), 0);
		assert_eq!(extra.guesses().len(), 6, "no guess after game over");

		Ok(())
	}

	#[test]
	fn test_session_bug_advance_and_last_level() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let won_first = BugGame::new(0).with_line_input("2").with_fix_input("if(i==1)").submit_guess(&ctx);

		// -- Exec
		let second = won_first.advance_level(&ctx);
		let won_second = second.with_line_input("2").with_fix_input("if(i==1)").submit_guess(&ctx);
		let stay = won_second.clone().advance_level(&ctx);

		// -- Check
		assert_eq!(won_second.level(), 1);
		assert_eq!(won_second.outcome(&ctx), LevelOutcome::AllLevelsComplete);
		assert!(!won_second.can_advance(&ctx));
		assert_eq!(stay, won_second);

		Ok(())
	}

	#[test]
	fn test_session_bug_advance_requires_win() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let game = BugGame::new(0).with_line_input("1").with_fix_input("if(i==1)").submit_guess(&ctx);

		// -- Exec
		let next = game.clone().advance_level(&ctx);

		// -- Check
		assert_eq!(next, game);

		Ok(())
	}

	#[test]
	fn test_session_bug_hints_bounded() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let mut game = BugGame::new(0);

		// -- Exec
		for _ in 0..5 {
			game = game.reveal_hint(&ctx);
		}
		let revealed = game.hints_revealed();
		let visible = game.visible_hints(&ctx);
		let game = game.hide_hints();

		// -- Check
		assert_eq!(revealed, 3);
		assert_eq!(visible[0], "Look at the condition");
		assert_eq!(game.hints_revealed(), 0);

		Ok(())
	}

	#[test]
	fn test_session_completion_partial_then_win() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let game = CompletionGame::new(0);

		// -- Exec
		let game = game.with_code_input("function f(x){\nreturn x*2\n}").submit_guess(&ctx);
		let partial_status = game.status(&ctx);
		let game = game.with_code_input("\nfunction f(x){\nreturn x*2;\n}\n\n").submit_guess(&ctx);

		// -- Check
		assert_eq!(partial_status, GameStatus::InProgress);
		assert_eq!(game.feedback().len(), 2);
		assert_eq!(game.status(&ctx), GameStatus::Won);
		assert_eq!(game.code_input(), "");

		Ok(())
	}

	#[test]
	fn test_session_completion_prefix_not_won() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;

		// -- Exec
		let game = CompletionGame::new(0).with_code_input("function f(x){\nreturn x*2;").submit_guess(&ctx);

		// -- Check
		assert!(is_all_correct(&game.feedback()[0]));
		assert!(!game.is_won(&ctx));

		Ok(())
	}

	#[test]
	fn test_session_completion_empty_blocked() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let game = CompletionGame::new(0).with_code_input("\n  \n");

		// -- Exec & Check
		assert_eq!(game.check_submission(&ctx), Err(SubmitBlock::EmptyGuess));
		assert!(game.submit_guess(&ctx).guesses().is_empty());

		Ok(())
	}

	#[test]
	fn test_session_mode_switch_and_reset() -> Result<()> {
		// -- Setup & Fixtures
		let ctx = ctx()?;
		let session = Session::default().select_mode(GameMode::Bug);

		// -- Exec
		let session = session.with_line_input("1").with_fix_input("x").submit_guess(&ctx);
		let switched = session.clone().select_mode(GameMode::Completion);
		let home = switched.reset();

		// -- Check
		assert!(matches!(&session, Session::Bug(g) if g.guesses().len() == 1));
		assert!(matches!(&home, Session::Home));
		assert_eq!(home.check_submission(&ctx), Err(SubmitBlock::NoActiveGame));
		assert_eq!(home.mode(), None);

		Ok(())
	}

	#[test]
	fn test_session_input_setters_follow_active_game() -> Result<()> {
		// -- Setup & Fixtures
		let bug = Session::default().select_mode(GameMode::Bug);
		let completion = Session::default().select_mode(GameMode::Completion);

		// -- Exec
		let bug = bug.with_line_input("2").with_fix_input("if(i==1)").with_code_input("ignored");
		let completion = completion.with_code_input("return x;").with_line_input("3").with_fix_input("ignored");
		let home = Session::Home.with_line_input("1").with_fix_input("x").with_code_input("y");

		// -- Check
		match &bug {
			Session::Bug(g) => {
				assert_eq!(g.line_input(), "2");
				assert_eq!(g.fix_input(), "if(i==1)");
			}
			other => return Err(format!("Expected bug session, got: {other:?}").into()),
		}
		match &completion {
			Session::Completion(g) => assert_eq!(g.code_input(), "return x;"),
			other => return Err(format!("Expected completion session, got: {other:?}").into()),
		}
		assert!(matches!(home, Session::Home));

		Ok(())
	}
}

// endregion: --- Tests
