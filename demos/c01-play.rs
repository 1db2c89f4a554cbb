use codel::{BugGame, Catalog, CompletionGame, GameConfig, GameContext};
use simple_fs::SPath;
use tracing_subscriber::EnvFilter;

const DATA_DIR: &str = "tests/data";

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// -- Tracing (RUST_LOG=codel=debug for rule-level detail)
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_target(true)
		.init();

	// -- Load
	let catalog = Catalog::load_dir(SPath::new(DATA_DIR))?;
	let ctx = GameContext::new(&catalog, GameConfig::default());
	println!("Loaded {} bug levels from {DATA_DIR}", ctx.bug_levels().len());

	// -- Bug mode
	let mut game = BugGame::new(0);
	let puzzle = game.puzzle(&ctx).ok_or("No bug levels in catalog")?;
	println!("\n== {} ({:?})", puzzle.title, puzzle.difficulty);
	for (i, line) in puzzle.buggy_lines.iter().enumerate() {
		println!("{:>3} | {line}", i + 1);
	}

	for (line, fix) in [("3", "return i;"), ("2", "if(i = 1)"), ("2", "if (i == 1)")] {
		game = game.with_line_input(line).with_fix_input(fix).submit_guess(&ctx);
		if let Some(guess) = game.guesses().last() {
			println!(
				"  guess line {} fix {fix:?}: line {} / fix {}",
				guess.line,
				ok_str(guess.line_correct),
				ok_str(guess.fix_correct)
			);
		}
	}
	println!("  outcome: {:?} (tries left {})", game.outcome(&ctx), game.tries_left(&ctx));
	if let Some(puzzle) = game.puzzle(&ctx) {
		println!("  fix: {}", puzzle.fix_highlights().join(" | "));
		println!("  why: {}", puzzle.explanation);
	}

	// -- Completion mode
	let mut game = CompletionGame::new(0);
	let Some(puzzle) = game.puzzle(&ctx) else {
		return Ok(());
	};
	println!("\n== {} (hint: {})", puzzle.title, puzzle.hint);

	for code in ["function f(x){\nreturn x*2\n}", "function f(x){\nreturn x*2;\n}"] {
		game = game.with_code_input(code).submit_guess(&ctx);
		if let Some(feedback) = game.feedback().last() {
			for fb in feedback {
				println!("  {:<8} {}", format!("{:?}", fb.status), fb.line);
			}
			println!("  --");
		}
	}
	println!("  status: {:?}", game.status(&ctx));

	Ok(())
}

fn ok_str(ok: bool) -> &'static str {
	if ok { "ok" } else { "wrong" }
}
