//! slopes-core: Problem generation, answer checking, and graph mapping.
//!
//! This crate defines the data model, the generator and evaluator, the
//! session state machine that front ends drive, and the coordinate
//! mapping used to draw the line.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod model;
pub mod render;
pub mod session;
pub mod tutorial;

pub use error::{CanvasError, ProblemError};
pub use model::{Feedback, LinearProblem, Point, ScoreState, SubmissionResult};
