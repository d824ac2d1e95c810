//! Answer normalization and checking.
//!
//! A submission is correct when, after whitespace normalization, it equals
//! one of the canonical forms of the problem's equation. Integers are
//! substituted literally, so a negative intercept reads `"y= 2x + -5"`.

use crate::model::{LinearProblem, ScoreState, SubmissionResult};

/// Trim the input and collapse internal whitespace runs to one space.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The exact strings accepted for `problem`.
pub fn accepted_forms(problem: &LinearProblem) -> Vec<String> {
    let m = problem.slope();
    let b = problem.intercept();
    if m == 0 {
        vec![format!("y= {b}")]
    } else if b == 0 {
        vec![format!("y= {m}x")]
    } else {
        vec![format!("y= {m}x + {b}"), format!("y= {b} + {m}x")]
    }
}

/// Check `raw` against the accepted forms without touching any counters.
pub fn is_accepted(problem: &LinearProblem, raw: &str) -> bool {
    let answer = normalize(raw);
    accepted_forms(problem).iter().any(|form| *form == answer)
}

/// Evaluate a submission and record it in `score`.
///
/// Never fails: every input, including an empty one, counts as an attempt.
pub fn evaluate(problem: &LinearProblem, raw: &str, score: &mut ScoreState) -> SubmissionResult {
    let result = SubmissionResult {
        is_correct: is_accepted(problem, raw),
    };
    score.record(result);
    tracing::debug!(
        answer = %normalize(raw),
        correct = result.is_correct,
        total = score.total,
        "evaluated submission"
    );
    result
}
