//! Random problem generation.
//!
//! Slopes are drawn from [-3, 3], intercepts from [-5, 5] and the shown
//! point's x from [-5, 5] without zero. What happens when the point lands
//! on the x-axis is governed by [`RetryPolicy`].

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{LinearProblem, Point};

pub const SLOPE_RANGE: RangeInclusive<i32> = -3..=3;
pub const INTERCEPT_RANGE: RangeInclusive<i32> = -5..=5;
pub const X_RANGE: RangeInclusive<i32> = -5..=5;

/// How the generator reacts when the drawn point has `y == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryPolicy {
    /// Redraw x once; keep the point on the x-axis if the retry also hits it.
    Single,
    /// Redraw until `y != 0`, redrawing the line itself when it is `y = 0`.
    #[default]
    Unbounded,
}

impl fmt::Display for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryPolicy::Single => write!(f, "single"),
            RetryPolicy::Unbounded => write!(f, "unbounded"),
        }
    }
}

impl FromStr for RetryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "once" => Ok(RetryPolicy::Single),
            "unbounded" => Ok(RetryPolicy::Unbounded),
            other => Err(format!("unknown retry policy: {other}")),
        }
    }
}

/// Produces random [`LinearProblem`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemGenerator {
    policy: RetryPolicy,
}

impl ProblemGenerator {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Draw a new problem from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> LinearProblem {
        let problem = match self.policy {
            RetryPolicy::Single => generate_single_retry(rng),
            RetryPolicy::Unbounded => generate_unbounded(rng),
        };
        tracing::debug!(
            slope = problem.slope(),
            intercept = problem.intercept(),
            point = %problem.point(),
            policy = %self.policy,
            "generated problem"
        );
        problem
    }
}

fn generate_single_retry<R: Rng + ?Sized>(rng: &mut R) -> LinearProblem {
    let slope = rng.gen_range(SLOPE_RANGE);
    let intercept = rng.gen_range(INTERCEPT_RANGE);
    let mut x = non_zero_x(rng);
    if y_at(slope, intercept, x) == 0 {
        let retry = non_zero_x(rng);
        if y_at(slope, intercept, retry) != 0 {
            x = retry;
        }
    }
    build(slope, intercept, x)
}

fn generate_unbounded<R: Rng + ?Sized>(rng: &mut R) -> LinearProblem {
    loop {
        let slope = rng.gen_range(SLOPE_RANGE);
        let intercept = rng.gen_range(INTERCEPT_RANGE);
        // y = 0 everywhere: no admissible point on this line.
        if slope == 0 && intercept == 0 {
            continue;
        }
        loop {
            let x = non_zero_x(rng);
            if y_at(slope, intercept, x) != 0 {
                return build(slope, intercept, x);
            }
        }
    }
}

fn non_zero_x<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    loop {
        let x = rng.gen_range(X_RANGE);
        if x != 0 {
            return x;
        }
    }
}

// Generator ranges are small enough that the line never overflows.
fn y_at(slope: i32, intercept: i32, x: i32) -> i32 {
    slope * x + intercept
}

fn build(slope: i32, intercept: i32, x: i32) -> LinearProblem {
    let y = y_at(slope, intercept, x);
    LinearProblem::from_parts(slope, intercept, Point { x, y })
}
