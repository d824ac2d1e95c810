//! The `slopes init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("slopes.toml").exists() {
        println!("slopes.toml already exists, skipping.");
    } else {
        std::fs::write("slopes.toml", SAMPLE_CONFIG)?;
        println!("Created slopes.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust slopes.toml (canvas size, retry policy, tutorial threshold)");
    println!("  2. Run: slopes practice");
    println!("  3. Run: slopes plot --slope 2 --intercept -5 --format html");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# slopes configuration

# Incorrect answers before the tutorial appears
tutorial_threshold = 3

# What to do when the drawn point lands on the x-axis:
#   "unbounded" redraws until it does not, "single" retries once
retry_policy = "unbounded"

# Fixed RNG seed for reproducible problems (SLOPES_SEED overrides)
# seed = 42

[canvas]
width = 800
height = 500
unit_pixels = 20
"#;
