//! Session state machine and the surface boundary front ends implement.
//!
//! A [`Session`] owns the current problem and its score. Front ends feed
//! it submissions and receive everything they need to display through a
//! [`Surface`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::evaluator;
use crate::model::{Feedback, LinearProblem, Point, ScoreState, SubmissionResult};
use crate::render::{self, Canvas, Plot};

/// Incorrect answers after which the tutorial appears.
pub const DEFAULT_TUTORIAL_THRESHOLD: u32 = 3;

/// Receives display updates from a session.
pub trait Surface {
    /// Show the point the learner has to reason about.
    fn on_problem(&mut self, point: Point);
    fn on_score(&mut self, score: &ScoreState);
    fn on_feedback(&mut self, feedback: Feedback);
    fn on_plot(&mut self, plot: &Plot);
    /// Create the tutorial overlay. Called at most once per session.
    fn on_tutorial(&mut self);
}

/// Surface that ignores every update.
pub struct NoopSurface;

impl Surface for NoopSurface {
    fn on_problem(&mut self, _: Point) {}
    fn on_score(&mut self, _: &ScoreState) {}
    fn on_feedback(&mut self, _: Feedback) {}
    fn on_plot(&mut self, _: &Plot) {}
    fn on_tutorial(&mut self) {}
}

/// Whether the tutorial overlay exists yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorialState {
    #[default]
    Hidden,
    Shown,
}

/// One learner session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    problem: LinearProblem,
    score: ScoreState,
    feedback: Option<Feedback>,
    tutorial: TutorialState,
    tutorial_threshold: u32,
    canvas: Canvas,
}

impl Session {
    pub fn new(problem: LinearProblem, canvas: Canvas, tutorial_threshold: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            problem,
            score: ScoreState::new(),
            feedback: None,
            tutorial: TutorialState::Hidden,
            tutorial_threshold,
            canvas,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn problem(&self) -> &LinearProblem {
        &self.problem
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn tutorial(&self) -> TutorialState {
        self.tutorial
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn plot(&self) -> Plot {
        render::plot(&self.problem, &self.canvas)
    }

    /// Push the initial state to `surface`.
    pub fn start(&self, surface: &mut dyn Surface) {
        tracing::info!(session = %self.id, point = %self.problem.point(), "session started");
        surface.on_problem(self.problem.point());
        surface.on_score(&self.score);
        surface.on_plot(&self.plot());
    }

    /// Evaluate one submission and push the resulting updates.
    pub fn submit(&mut self, raw: &str, surface: &mut dyn Surface) -> SubmissionResult {
        let result = evaluator::evaluate(&self.problem, raw, &mut self.score);
        let feedback = Feedback::from(result);
        self.feedback = Some(feedback);
        surface.on_feedback(feedback);

        if feedback == Feedback::Incorrect && self.score.incorrect == self.tutorial_threshold {
            self.show_tutorial(surface);
        }

        surface.on_score(&self.score);
        // The line is redrawn on every submission even though it never changes.
        surface.on_plot(&self.plot());
        result
    }

    /// Create the tutorial overlay unless it already exists.
    ///
    /// Returns `true` only when this call created it.
    pub fn show_tutorial(&mut self, surface: &mut dyn Surface) -> bool {
        if self.tutorial == TutorialState::Shown {
            return false;
        }
        tracing::info!(
            session = %self.id,
            incorrect = self.score.incorrect,
            "showing tutorial"
        );
        self.tutorial = TutorialState::Shown;
        surface.on_tutorial();
        true
    }

    /// Move on to a new problem.
    ///
    /// The score restarts from zero and the feedback clears. The tutorial
    /// stays shown for the rest of the session.
    pub fn next_problem(&mut self, problem: LinearProblem, surface: &mut dyn Surface) {
        tracing::info!(
            session = %self.id,
            previous = ?self.score,
            point = %problem.point(),
            "next problem"
        );
        self.problem = problem;
        self.score = ScoreState::new();
        self.feedback = None;
        surface.on_problem(self.problem.point());
        surface.on_score(&self.score);
        surface.on_plot(&self.plot());
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            started_at: self.started_at,
            problem: self.problem,
            score: self.score,
            feedback: self.feedback,
            tutorial: self.tutorial,
            canvas: self.canvas,
        }
    }
}

/// Serializable view of a session for display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub problem: LinearProblem,
    pub score: ScoreState,
    pub feedback: Option<Feedback>,
    pub tutorial: TutorialState,
    pub canvas: Canvas,
}

impl SessionSnapshot {
    pub fn plot(&self) -> Plot {
        render::plot(&self.problem, &self.canvas)
    }
}
