//! slopes CLI: terminal front end for the slope-intercept exercise.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "slopes", version, about = "Slope-intercept form practice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Practice interactively, one answer per line on stdin
    Practice {
        /// Fix the problem's slope (requires --intercept and --x)
        #[arg(long, allow_hyphen_values = true)]
        slope: Option<i32>,

        /// Fix the problem's intercept
        #[arg(long, allow_hyphen_values = true)]
        intercept: Option<i32>,

        /// Fix the x coordinate of the shown point
        #[arg(long, allow_hyphen_values = true)]
        x: Option<i32>,

        /// RNG seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,

        /// Write an HTML snapshot of the session on exit
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a single answer against a line
    Check {
        /// Slope of the line
        #[arg(long, allow_hyphen_values = true)]
        slope: i32,

        /// Intercept of the line
        #[arg(long, allow_hyphen_values = true)]
        intercept: i32,

        /// x coordinate of the shown point
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        x: i32,

        /// The answer text
        #[arg(long, allow_hyphen_values = true)]
        answer: String,

        /// List the accepted answer forms
        #[arg(long)]
        show_forms: bool,
    },

    /// Draw a line on the coordinate grid
    Plot {
        /// Slope of the line
        #[arg(long, allow_hyphen_values = true)]
        slope: i32,

        /// Intercept of the line
        #[arg(long, allow_hyphen_values = true)]
        intercept: i32,

        /// x coordinate of the shown point (html only)
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        x: i32,

        /// Output file (default: slopes-plot.<format>)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: svg, html, json
        #[arg(long, default_value = "svg")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("slopes=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice {
            slope,
            intercept,
            x,
            seed,
            output,
            config,
        } => commands::practice::execute(slope, intercept, x, seed, output, config),
        Commands::Check {
            slope,
            intercept,
            x,
            answer,
            show_forms,
        } => commands::check::execute(slope, intercept, x, answer, show_forms),
        Commands::Plot {
            slope,
            intercept,
            x,
            output,
            format,
            config,
        } => commands::plot::execute(slope, intercept, x, output, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
