//! The `slopes practice` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use slopes_core::config::load_config_from;
use slopes_core::render::Plot;
use slopes_core::session::{Session, Surface};
use slopes_core::tutorial::TUTORIAL;
use slopes_core::{Feedback, LinearProblem, Point, ScoreState};
use slopes_report::html::write_html_report;

/// Input line that moves on to a fresh problem.
const NEXT_COMMAND: &str = ":next";
/// Input line that ends the session.
const QUIT_COMMAND: &str = ":quit";

/// Console surface printing updates to stdout.
struct TerminalSurface;

impl Surface for TerminalSurface {
    fn on_problem(&mut self, point: Point) {
        println!("Write the equation of the line through {point}");
        println!("Answer format: y= mx + b   ({NEXT_COMMAND} for a new problem, {QUIT_COMMAND} to stop)");
    }

    fn on_score(&mut self, score: &ScoreState) {
        println!(
            "Correct: {}  Incorrect: {}  Total: {}",
            score.correct, score.incorrect, score.total
        );
    }

    fn on_feedback(&mut self, feedback: Feedback) {
        println!("{} {feedback}", feedback.message());
    }

    // A terminal has no drawing surface; `slopes plot` and --output draw.
    fn on_plot(&mut self, _: &Plot) {}

    fn on_tutorial(&mut self) {
        println!("\n{}", TUTORIAL.to_plain_text());
    }
}

pub fn execute(
    slope: Option<i32>,
    intercept: Option<i32>,
    x: Option<i32>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if seed.is_some() {
        config.seed = seed;
    }

    let generator = config.generator();
    let mut rng = config.rng();

    let problem = match (slope, intercept, x) {
        (Some(m), Some(b), Some(x)) => LinearProblem::new(m, b, x)?,
        (None, None, None) => generator.generate(&mut rng),
        _ => anyhow::bail!("--slope, --intercept and --x must be given together"),
    };

    let mut surface = TerminalSurface;
    let mut session = Session::new(problem, config.canvas, config.tutorial_threshold);
    session.start(&mut surface);

    let stdin = io::stdin();
    let mut rounds = 1u32;
    let mut totals = ScoreState::new();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read answer from stdin")?;
        match line.trim() {
            QUIT_COMMAND => break,
            NEXT_COMMAND => {
                merge(&mut totals, session.score());
                rounds += 1;
                let next = generator.generate(&mut rng);
                session.next_problem(next, &mut surface);
            }
            _ => {
                session.submit(&line, &mut surface);
            }
        }
        prompt()?;
    }
    println!();
    merge(&mut totals, session.score());
    tracing::debug!(rounds, total = totals.total, "practice session finished");

    print_summary(rounds, &totals);

    if let Some(path) = output {
        write_html_report(&session.snapshot(), &path)?;
        println!("Session snapshot: {}", path.display());
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

fn merge(totals: &mut ScoreState, round: &ScoreState) {
    totals.correct += round.correct;
    totals.incorrect += round.incorrect;
    totals.total += round.total;
}

fn print_summary(rounds: u32, totals: &ScoreState) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Problems", "Correct", "Incorrect", "Total", "Accuracy"]);
    table.add_row(vec![
        Cell::new(rounds),
        Cell::new(totals.correct),
        Cell::new(totals.incorrect),
        Cell::new(totals.total),
        Cell::new(format!("{:.1}%", totals.accuracy() * 100.0)),
    ]);

    println!("{table}");
}
