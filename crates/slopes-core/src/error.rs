//! Construction errors.
//!
//! Generation, evaluation and rendering are total; only building a
//! problem or a canvas from caller-supplied numbers can fail.

use thiserror::Error;

/// Errors that can occur when constructing a [`LinearProblem`](crate::LinearProblem)
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    /// The shown point must not sit on the y-axis.
    #[error("point x coordinate must be non-zero")]
    ZeroX,

    /// `slope * x + intercept` does not fit in an `i32`.
    #[error("point y overflows for slope {slope}, intercept {intercept}, x {x}")]
    Overflow { slope: i32, intercept: i32, x: i32 },
}

impl ProblemError {
    /// Returns `true` if the error comes from arithmetic range rather than
    /// from an invalid argument.
    pub fn is_overflow(&self) -> bool {
        matches!(self, ProblemError::Overflow { .. })
    }
}

/// Errors that can occur when constructing a [`Canvas`](crate::render::Canvas).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas {0} must be positive")]
    NonPositive(&'static str),
}
