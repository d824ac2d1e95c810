//! The `slopes check` command.

use anyhow::Result;

use slopes_core::evaluator::{accepted_forms, evaluate};
use slopes_core::{Feedback, LinearProblem, ScoreState};

pub fn execute(slope: i32, intercept: i32, x: i32, answer: String, show_forms: bool) -> Result<()> {
    let problem = LinearProblem::new(slope, intercept, x)?;
    let mut score = ScoreState::new();
    let result = evaluate(&problem, &answer, &mut score);

    println!("{}", Feedback::from(result));

    if show_forms {
        println!("Accepted forms for {}:", problem.point());
        for form in accepted_forms(&problem) {
            println!("  \"{form}\"");
        }
    }

    Ok(())
}
