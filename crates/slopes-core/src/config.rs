//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::generator::{ProblemGenerator, RetryPolicy};
use crate::render::Canvas;
use crate::session::DEFAULT_TUTORIAL_THRESHOLD;

/// Top-level slopes configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopesConfig {
    /// Incorrect answers before the tutorial overlay appears.
    #[serde(default = "default_tutorial_threshold")]
    pub tutorial_threshold: u32,
    /// What the generator does when the point lands on the x-axis.
    #[serde(default)]
    pub retry_policy: RetryPolicy,
    /// Fixed RNG seed for reproducible problems.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Graph dimensions.
    #[serde(default)]
    pub canvas: Canvas,
}

fn default_tutorial_threshold() -> u32 {
    DEFAULT_TUTORIAL_THRESHOLD
}

impl Default for SlopesConfig {
    fn default() -> Self {
        Self {
            tutorial_threshold: default_tutorial_threshold(),
            retry_policy: RetryPolicy::default(),
            seed: None,
            canvas: Canvas::default(),
        }
    }
}

impl SlopesConfig {
    /// Reject values the session cannot work with. Canvas dimensions are
    /// already checked when the canvas is parsed.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.tutorial_threshold >= 1,
            "tutorial_threshold must be at least 1"
        );
        Ok(())
    }

    pub fn generator(&self) -> ProblemGenerator {
        ProblemGenerator::new(self.retry_policy)
    }

    /// RNG seeded from `seed`, or from OS entropy when unset.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parse a configuration from TOML text.
pub fn parse_config_str(content: &str) -> Result<SlopesConfig> {
    let config: SlopesConfig = toml::from_str(content).context("failed to parse config")?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `slopes.toml` in the current directory
/// 2. `~/.config/slopes/config.toml`
///
/// Environment variable override: `SLOPES_SEED`.
pub fn load_config() -> Result<SlopesConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SlopesConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("slopes.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SlopesConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            SlopesConfig::default()
        }
    };

    apply_env_seed(&mut config, std::env::var("SLOPES_SEED").ok().as_deref());

    config.validate()?;
    Ok(config)
}

/// Apply a `SLOPES_SEED` value. An unparsable value is logged and ignored.
fn apply_env_seed(config: &mut SlopesConfig, raw: Option<&str>) {
    let Some(raw) = raw else {
        return;
    };
    match raw.trim().parse::<u64>() {
        Ok(seed) => {
            if config.seed.is_some() {
                tracing::warn!(seed, "SLOPES_SEED overrides the configured seed");
            }
            config.seed = Some(seed);
        }
        Err(e) => {
            tracing::warn!(value = raw, error = %e, "ignoring invalid SLOPES_SEED");
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("slopes"))
}
