//! Core data model types for slopes.
//!
//! A [`LinearProblem`] is created once per round and never mutated. The
//! [`ScoreState`] is the only mutable piece and is owned by whoever drives
//! the evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProblemError;

/// An integer point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line in slope-intercept form plus the point shown to the learner.
///
/// Deserialization goes through [`LinearProblem::new`]: `point.y` is
/// recomputed from the line and a zero `x` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem")]
pub struct LinearProblem {
    slope: i32,
    intercept: i32,
    point: Point,
}

impl LinearProblem {
    /// Build a problem from its line and the x coordinate of the shown point.
    ///
    /// Any integer slope and intercept are allowed; the generator ranges only
    /// apply to random problems.
    pub fn new(slope: i32, intercept: i32, x: i32) -> Result<Self, ProblemError> {
        if x == 0 {
            return Err(ProblemError::ZeroX);
        }
        let y = line_y(slope, intercept, x).ok_or(ProblemError::Overflow {
            slope,
            intercept,
            x,
        })?;
        Ok(Self {
            slope,
            intercept,
            point: Point { x, y },
        })
    }

    /// Assemble a problem the caller has already checked.
    pub(crate) fn from_parts(slope: i32, intercept: i32, point: Point) -> Self {
        Self {
            slope,
            intercept,
            point,
        }
    }

    pub fn slope(&self) -> i32 {
        self.slope
    }

    pub fn intercept(&self) -> i32 {
        self.intercept
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// `true` when the shown point lies on the x-axis.
    pub fn is_degenerate(&self) -> bool {
        self.point.y == 0
    }
}

/// Wire shape of a [`LinearProblem`] before validation.
#[derive(Deserialize)]
struct RawProblem {
    slope: i32,
    intercept: i32,
    point: RawPoint,
}

#[derive(Deserialize)]
struct RawPoint {
    x: i32,
}

impl TryFrom<RawProblem> for LinearProblem {
    type Error = ProblemError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        LinearProblem::new(raw.slope, raw.intercept, raw.point.x)
    }
}

/// `slope * x + intercept`, or `None` on overflow.
fn line_y(slope: i32, intercept: i32, x: i32) -> Option<i32> {
    slope.checked_mul(x)?.checked_add(intercept)
}

/// Running counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluated submission.
    pub fn record(&mut self, result: SubmissionResult) {
        self.total += 1;
        if result.is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    /// Fraction of correct submissions, 0.0 before the first one.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

/// Outcome of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub is_correct: bool,
}

/// Visual feedback state shown after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    /// Style class toggled on the main pane.
    pub fn class(&self) -> &'static str {
        match self {
            Feedback::Correct => "correct",
            Feedback::Incorrect => "incorrect",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Feedback::Correct => "\u{2705}\u{1F60A}\u{1F60A}",
            Feedback::Incorrect => "\u{274C}\u{1F61E}\u{1F61E}",
        }
    }
}

impl From<SubmissionResult> for Feedback {
    fn from(result: SubmissionResult) -> Self {
        if result.is_correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "correct" => Ok(Feedback::Correct),
            "incorrect" => Ok(Feedback::Incorrect),
            other => Err(format!("unknown feedback: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_point_lies_on_line() {
        let problem = LinearProblem::new(2, -5, 4).unwrap();
        assert_eq!(problem.point(), Point { x: 4, y: 3 });
        assert_eq!(problem.point().to_string(), "(4, 3)");
        assert!(!problem.is_degenerate());
    }

    #[test]
    fn problem_rejects_zero_x() {
        assert_eq!(LinearProblem::new(1, 1, 0), Err(ProblemError::ZeroX));
    }

    #[test]
    fn problem_rejects_overflow() {
        let err = LinearProblem::new(i32::MAX, 0, 2).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn degenerate_point_is_allowed_by_construction() {
        let problem = LinearProblem::new(1, -2, 2).unwrap();
        assert!(problem.is_degenerate());
    }

    #[test]
    fn score_record_keeps_total_in_sync() {
        let mut score = ScoreState::new();
        score.record(SubmissionResult { is_correct: false });
        score.record(SubmissionResult { is_correct: true });
        score.record(SubmissionResult { is_correct: false });
        assert_eq!(score.correct, 1);
        assert_eq!(score.incorrect, 2);
        assert_eq!(score.total, score.correct + score.incorrect);
        assert!((score.accuracy() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn feedback_display_and_parse() {
        assert_eq!(Feedback::Correct.to_string(), "correct");
        assert_eq!(
            "Incorrect".parse::<Feedback>().unwrap(),
            Feedback::Incorrect
        );
        assert!("maybe".parse::<Feedback>().is_err());
        assert!(Feedback::Correct.message().starts_with('\u{2705}'));
    }

    #[test]
    fn problem_serde_roundtrip() {
        let problem = LinearProblem::new(-3, 4, -1).unwrap();
        let json = serde_json::to_string(&problem).unwrap();
        let back: LinearProblem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, problem);
    }

    #[test]
    fn deserialize_rejects_zero_x() {
        let err = serde_json::from_str::<LinearProblem>(
            r#"{"slope":1,"intercept":0,"point":{"x":0,"y":99}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn deserialize_recomputes_point_y() {
        let problem: LinearProblem =
            serde_json::from_str(r#"{"slope":2,"intercept":-5,"point":{"x":4,"y":99}}"#).unwrap();
        assert_eq!(problem.point(), Point { x: 4, y: 3 });
    }

    #[test]
    fn deserialize_rejects_overflow() {
        let json = format!(
            r#"{{"slope":{},"intercept":0,"point":{{"x":2,"y":0}}}}"#,
            i32::MAX
        );
        assert!(serde_json::from_str::<LinearProblem>(&json).is_err());
    }
}
