//! The `slopes plot` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use slopes_core::config::load_config_from;
use slopes_core::render;
use slopes_core::session::Session;
use slopes_core::LinearProblem;
use slopes_report::html::write_html_report;
use slopes_report::svg::write_svg;

pub fn execute(
    slope: i32,
    intercept: i32,
    x: i32,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let problem = LinearProblem::new(slope, intercept, x)?;
    let path = output.unwrap_or_else(|| PathBuf::from(format!("slopes-plot.{format}")));

    match format.as_str() {
        "svg" => {
            let plot = render::plot(&problem, &config.canvas);
            write_svg(&plot, &path)?;
        }
        "html" => {
            let session = Session::new(problem, config.canvas, config.tutorial_threshold);
            write_html_report(&session.snapshot(), &path)?;
        }
        "json" => {
            let plot = render::plot(&problem, &config.canvas);
            let json = serde_json::to_string_pretty(&plot).context("failed to serialize plot")?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write plot to {}", path.display()))?;
        }
        other => anyhow::bail!("unknown format: {other} (expected svg, html or json)"),
    }

    println!("Plot written to: {}", path.display());
    Ok(())
}
