//! Fix-guess acceptance for "find the bug" puzzles.
//!
//! A guess is run through `FIX_RULES` in order. Each rule either accepts, rejects,
//! or passes to the next one. The order goes from strict equality to fuzzy
//! containment, so a stricter rule always decides before a looser one can.

use crate::BugPuzzle;
use crate::normalize::{normalize_for_comparison, normalize_lines, strip_all_whitespace};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_RETURN_EXPR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*return\s+(.+?)\s*;?\s*$").unwrap());
static RE_ASSIGNMENT: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^\s*(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(.+?)\s*;?\s*$").unwrap());
static RE_RETURN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*return\s+([A-Za-z_$][\w$]*)\s*;?\s*$").unwrap());

/// Named acceptance strategies, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixRule {
	/// Guess reproduces every corrected line.
	ExactFull,
	/// Same as `ExactFull`, ignoring all whitespace.
	ExactFullNoWhitespace,
	/// Guess is exactly the changed lines, in order.
	ChangedLinesOnly,
	/// Any guess line is one of the changed lines.
	AnyChangedLine,
	/// Joined guess is a substring of the joined target.
	TargetContainsGuess,
	/// Whitespace-stripped guess and target contain one another.
	StrippedContainment,
	/// Single-line guess found inside the joined target.
	SingleLineInTarget,
	/// Guess matches one of the puzzle's declared valid fixes.
	DeclaredValidFix,
	/// Guess returns a variable holding the expected return expression.
	/// Rejects when the guess does not also carry the variable's assignment.
	ReturnedVariable,
	/// Single-line guess equals the corrected line at the bug position.
	BugLineFallback,
}

/// Evaluation order. First decisive rule wins.
pub const FIX_RULES: &[FixRule] = &[
	FixRule::ExactFull,
	FixRule::ExactFullNoWhitespace,
	FixRule::ChangedLinesOnly,
	FixRule::AnyChangedLine,
	FixRule::TargetContainsGuess,
	FixRule::StrippedContainment,
	FixRule::SingleLineInTarget,
	FixRule::DeclaredValidFix,
	FixRule::ReturnedVariable,
	FixRule::BugLineFallback,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleVerdict {
	Accept,
	Reject,
	Continue,
}

/// Outcome of a fix evaluation, with the rule that decided it.
///
/// `rule` is `None` when the guess was empty or no rule was decisive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixVerdict {
	pub accepted: bool,
	pub rule: Option<FixRule>,
}

/// Returns whether `fix_guess` counts as having fixed `puzzle`'s bug.
pub fn is_fix_guess_correct(fix_guess: &str, puzzle: &BugPuzzle) -> bool {
	evaluate_fix(fix_guess, puzzle).accepted
}

/// Runs `fix_guess` through `FIX_RULES` and reports the deciding rule.
pub fn evaluate_fix(fix_guess: &str, puzzle: &BugPuzzle) -> FixVerdict {
	let Some(ctx) = FixContext::new(fix_guess, puzzle) else {
		debug!(target: "codel::fix_match", puzzle_id = puzzle.id, "empty fix guess, rejected");
		return FixVerdict {
			accepted: false,
			rule: None,
		};
	};

	for rule in FIX_RULES {
		match rule.check(&ctx) {
			RuleVerdict::Accept => {
				debug!(target: "codel::fix_match", puzzle_id = puzzle.id, ?rule, "fix guess accepted");
				return FixVerdict {
					accepted: true,
					rule: Some(*rule),
				};
			}
			RuleVerdict::Reject => {
				debug!(target: "codel::fix_match", puzzle_id = puzzle.id, ?rule, "fix guess rejected");
				return FixVerdict {
					accepted: false,
					rule: Some(*rule),
				};
			}
			RuleVerdict::Continue => (),
		}
	}

	debug!(target: "codel::fix_match", puzzle_id = puzzle.id, "no rule matched fix guess");
	FixVerdict {
		accepted: false,
		rule: None,
	}
}

// region:    --- FixContext

/// Pre-normalized views of a guess and its puzzle, shared by all rules.
pub struct FixContext<'a> {
	puzzle: &'a BugPuzzle,
	/// Non-empty comparison-normalized guess lines.
	guess_lines: Vec<String>,
	/// Comparison-normalized `fixed_lines`.
	target_lines: Vec<String>,
	changed_lines: Vec<String>,
	full_guess: String,
	full_target: String,
}

impl<'a> FixContext<'a> {
	/// Returns `None` when the guess has no non-blank line.
	pub fn new(fix_guess: &str, puzzle: &'a BugPuzzle) -> Option<Self> {
		let guess_lines: Vec<String> = normalize_lines(fix_guess)
			.iter()
			.map(|l| normalize_for_comparison(l))
			.filter(|l| !l.is_empty())
			.collect();

		if guess_lines.is_empty() {
			return None;
		}

		let target_lines: Vec<String> = puzzle.fixed_lines.iter().map(|l| normalize_for_comparison(l)).collect();
		let full_guess = guess_lines.join(" ");
		let full_target = target_lines.join(" ");

		Some(Self {
			puzzle,
			changed_lines: puzzle.changed_lines(),
			guess_lines,
			target_lines,
			full_guess,
			full_target,
		})
	}
}

// endregion: --- FixContext

// region:    --- Rules

impl FixRule {
	pub fn check(self, ctx: &FixContext) -> RuleVerdict {
		let accepted = match self {
			FixRule::ExactFull => ctx.guess_lines == ctx.target_lines,
			FixRule::ExactFullNoWhitespace => {
				ctx.guess_lines.len() == ctx.target_lines.len()
					&& ctx
						.guess_lines
						.iter()
						.zip(&ctx.target_lines)
						.all(|(g, t)| strip_all_whitespace(g) == strip_all_whitespace(t))
			}
			FixRule::ChangedLinesOnly => !ctx.changed_lines.is_empty() && ctx.guess_lines == ctx.changed_lines,
			FixRule::AnyChangedLine => ctx.guess_lines.iter().any(|l| ctx.changed_lines.contains(l)),
			FixRule::TargetContainsGuess => ctx.full_target.contains(&ctx.full_guess),
			FixRule::StrippedContainment => {
				let guess = strip_all_whitespace(&ctx.full_guess);
				let target = strip_all_whitespace(&ctx.full_target);
				guess == target || guess.contains(&target) || target.contains(&guess)
			}
			FixRule::SingleLineInTarget => {
				ctx.guess_lines.len() == 1 && ctx.full_target.contains(&ctx.guess_lines[0])
			}
			FixRule::DeclaredValidFix => {
				let fixes: Vec<String> = ctx.puzzle.valid_fixes().iter().map(|f| strip_all_whitespace(f)).collect();
				let full_guess = strip_all_whitespace(&ctx.full_guess);
				ctx.guess_lines.iter().any(|l| fixes.contains(&strip_all_whitespace(l))) || fixes.contains(&full_guess)
			}
			FixRule::ReturnedVariable => return check_returned_variable(ctx),
			FixRule::BugLineFallback => {
				ctx.guess_lines.len() == 1
					&& ctx.target_lines.get(ctx.puzzle.bug_line_index()) == Some(&ctx.guess_lines[0])
			}
		};

		if accepted {
			RuleVerdict::Accept
		} else {
			RuleVerdict::Continue
		}
	}
}

/// A guess like `return x;` may return a variable that the buggy snippet
/// assigns the expected expression to. That only counts when the guess also
/// carries the assignment, otherwise the guess is rejected outright.
fn check_returned_variable(ctx: &FixContext) -> RuleVerdict {
	let Some(expected) = ctx.puzzle.fixed_lines.iter().find_map(|l| return_expr(l)) else {
		return RuleVerdict::Continue;
	};

	// (name, stripped assignment without trailing `;`)
	let assignments: Vec<(String, String)> = ctx
		.puzzle
		.buggy_lines
		.iter()
		.filter_map(|line| {
			let caps = RE_ASSIGNMENT.captures(line)?;
			(strip_all_whitespace(&caps[2]) == expected).then(|| {
				let assignment = strip_all_whitespace(line);
				let assignment = assignment.trim_end_matches(';').to_string();
				(caps[1].to_string(), assignment)
			})
		})
		.collect();

	if assignments.is_empty() {
		return RuleVerdict::Continue;
	}

	let returned = ctx
		.guess_lines
		.iter()
		.filter_map(|l| RE_RETURN_NAME.captures(l).map(|caps| caps[1].to_string()))
		.find_map(|name| assignments.iter().find(|(var, _)| *var == name));

	let Some((_, assignment)) = returned else {
		return RuleVerdict::Continue;
	};

	if strip_all_whitespace(&ctx.full_guess).contains(assignment.as_str()) {
		RuleVerdict::Accept
	} else {
		RuleVerdict::Reject
	}
}

/// Whitespace-stripped expression of a `return <expr>;` line.
fn return_expr(line: &str) -> Option<String> {
	RE_RETURN_EXPR.captures(line).map(|caps| strip_all_whitespace(&caps[1]))
}

// endregion: --- Rules

// region:    --- Tests


// endregion: --- Tests
