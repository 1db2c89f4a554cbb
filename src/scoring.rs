use serde::Serialize;

/// Per-line verdict of a completion guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
	/// Same text at the same index.
	Correct,
	/// Same text at another, unclaimed, target index.
	Present,
	Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFeedback {
	pub line: String,
	pub status: LineStatus,
}

/// Scores `guess_lines` against `target_lines` line by line, Wordle style.
///
/// Comparison is verbatim. Positional matches are resolved first, then each
/// remaining guess line claims the first unused identical target line. A target
/// line is claimed at most once, so duplicates in the guess do not all turn `Present`.
pub fn score_guess<G, T>(guess_lines: &[G], target_lines: &[T]) -> Vec<LineFeedback>
where
	G: AsRef<str>,
	T: AsRef<str>,
{
	let mut used = vec![false; target_lines.len()];

	// -- Pass 1: exact position
	let mut statuses: Vec<LineStatus> = guess_lines
		.iter()
		.enumerate()
		.map(|(i, line)| match target_lines.get(i) {
			Some(target) if target.as_ref() == line.as_ref() => {
				used[i] = true;
				LineStatus::Correct
			}
			_ => LineStatus::Absent,
		})
		.collect();

	// -- Pass 2: displaced
	for (line, status) in guess_lines.iter().zip(statuses.iter_mut()) {
		if *status != LineStatus::Absent {
			continue;
		}
		let found = target_lines
			.iter()
			.enumerate()
			.position(|(ti, target)| !used[ti] && target.as_ref() == line.as_ref());
		if let Some(ti) = found {
			used[ti] = true;
			*status = LineStatus::Present;
		}
	}

	guess_lines
		.iter()
		.zip(statuses)
		.map(|(line, status)| LineFeedback {
			line: line.as_ref().to_string(),
			status,
		})
		.collect()
}

/// True when the feedback is non-empty and every line is `Correct`.
pub fn is_all_correct(feedback: &[LineFeedback]) -> bool {
	!feedback.is_empty() && feedback.iter().all(|f| f.status == LineStatus::Correct)
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use proptest::prelude::*;

	fn statuses(feedback: &[LineFeedback]) -> Vec<LineStatus> {
		feedback.iter().map(|f| f.status).collect()
	}

	#[test]
	fn test_scoring_identical_all_correct() -> Result<()> {
		// -- Setup & Fixtures
		let target = ["function f(x){", "return x*2;", "}"];

		// -- Exec
		let fb = score_guess(&target, &target);

		// -- Check
		assert!(is_all_correct(&fb));

		Ok(())
	}

	#[test]
	fn test_scoring_verbatim_semicolon_dropped() -> Result<()> {
		// -- Setup & Fixtures
		let target = ["function f(x){", "return x*2;", "}"];
		let guess = ["function f(x){", "return x*2", "}"];

		// -- Exec
		let fb = score_guess(&guess, &target);

		// -- Check
		assert_eq!(
			statuses(&fb),
			vec![LineStatus::Correct, LineStatus::Absent, LineStatus::Correct]
		);
		assert_eq!(fb[1].line, "return x*2");

		Ok(())
	}

	#[test]
	fn test_scoring_no_whitespace_normalization() -> Result<()> {
		// -- Setup & Fixtures
		let target = ["  a();"];
		let guess = ["a();"];

		// -- Exec
		let fb = score_guess(&guess, &target);

		// -- Check
		assert_eq!(statuses(&fb), vec![LineStatus::Absent]);

		Ok(())
	}

	#[test]
	fn test_scoring_present_displaced() -> Result<()> {
		// -- Setup & Fixtures
		let target = ["a", "b", "c"];
		let guess = ["b", "a", "c"];

		// -- Exec
		let fb = score_guess(&guess, &target);

		// -- Check
		assert_eq!(
			statuses(&fb),
			vec![LineStatus::Present, LineStatus::Present, LineStatus::Correct]
		);

		Ok(())
	}

	#[test]
	fn test_scoring_duplicate_claims_once() -> Result<()> {
		// -- Setup & Fixtures
		let target = ["}", "x", "y"];
		let guess = ["a", "}", "}", "}"];

		// -- Exec
		let fb = score_guess(&guess, &target);

		// -- Check
		assert_eq!(
			statuses(&fb),
			vec![LineStatus::Absent, LineStatus::Present, LineStatus::Absent, LineStatus::Absent]
		);

		Ok(())
	}

	#[test]
	fn test_scoring_exact_position_wins_over_earlier_present() -> Result<()> {
		// -- Setup & Fixtures
		let target = ["x", "}"];
		let guess = ["}", "}"];

		// -- Exec
		let fb = score_guess(&guess, &target);

		// -- Check
		assert_eq!(statuses(&fb), vec![LineStatus::Absent, LineStatus::Correct]);

		Ok(())
	}

	#[test]
	fn test_scoring_longer_guess() -> Result<()> {
		// -- Setup & Fixtures
		let target = ["a"];
		let guess = ["a", "a", "b"];

		// -- Exec
		let fb = score_guess(&guess, &target);

		// -- Check
		assert_eq!(fb.len(), 3);
		assert_eq!(
			statuses(&fb),
			vec![LineStatus::Correct, LineStatus::Absent, LineStatus::Absent]
		);
		assert!(!is_all_correct(&[]));

		Ok(())
	}

	proptest! {
		#[test]
		fn prop_scoring_claims_bounded_by_target(
			guess in prop::collection::vec("[ab}]{0,2}", 0..8),
			target in prop::collection::vec("[ab}]{0,2}", 0..8),
		) {
			let fb = score_guess(&guess, &target);
			let claimed = fb.iter().filter(|f| f.status != LineStatus::Absent).count();

			prop_assert_eq!(fb.len(), guess.len());
			prop_assert!(claimed <= target.len());

			// each claimed guess line must map to a distinct target occurrence of the same text
			for text in fb.iter().map(|f| &f.line) {
				let claims = fb.iter().filter(|f| &f.line == text && f.status != LineStatus::Absent).count();
				let available = target.iter().filter(|t| *t == text).count();
				prop_assert!(claims <= available);
			}
		}

		#[test]
		fn prop_scoring_identical_is_all_correct(lines in prop::collection::vec("[a-z ;]{0,6}", 1..8)) {
			let fb = score_guess(&lines, &lines);
			prop_assert!(fb.iter().all(|f| f.status == LineStatus::Correct));
		}
	}
}

// endregion: --- Tests
