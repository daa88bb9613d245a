//! Defaults for the helpers, loadable from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::random::{
    DEFAULT_LIST_SIZE, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_PROBABILITY, RandomStringOptions,
    seeded_rng,
};
use crate::strings::{DEFAULT_SUFFIX, truncate_string};

/// Helper configuration (TOML).
///
/// Missing fields fall back to the same defaults the functions document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UtilsConfig {
    /// Fixed seed for reproducible random output. Unset means OS entropy.
    pub seed: Option<u64>,

    /// Suffix appended by truncation.
    pub truncate_suffix: String,

    pub random: RandomConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RandomConfig {
    pub string_length: usize,
    pub include_digits: bool,
    pub include_special: bool,
    /// Inclusive lower bound for integer draws.
    pub min: i64,
    /// Inclusive upper bound for integer draws.
    pub max: i64,
    pub list_size: usize,
    /// Chance of `true` for boolean draws, in `[0, 1]`.
    pub probability: f64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        let strings = RandomStringOptions::default();
        Self {
            string_length: strings.length,
            include_digits: strings.include_digits,
            include_special: strings.include_special,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            list_size: DEFAULT_LIST_SIZE,
            probability: DEFAULT_PROBABILITY,
        }
    }
}

impl Default for UtilsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            truncate_suffix: DEFAULT_SUFFIX.to_string(),
            random: RandomConfig::default(),
        }
    }
}

impl UtilsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.random.min > self.random.max {
            return Err(anyhow!(
                "random.min ({}) must be <= random.max ({})",
                self.random.min,
                self.random.max
            ));
        }
        if !(0.0..=1.0).contains(&self.random.probability) {
            return Err(anyhow!(
                "random.probability must be within [0, 1], got {}",
                self.random.probability
            ));
        }
        Ok(())
    }

    /// Random source honoring `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => seeded_rng(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// [`truncate_string`] with the configured suffix.
    pub fn truncate(&self, text: &str, max_length: usize) -> String {
        truncate_string(text, max_length, &self.truncate_suffix)
    }

    pub fn string_options(&self) -> RandomStringOptions {
        RandomStringOptions {
            length: self.random.string_length,
            include_digits: self.random.include_digits,
            include_special: self.random.include_special,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `UtilsConfig::default()`.
pub fn load_config(path: &Path) -> Result<UtilsConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(UtilsConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UtilsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), seed = ?cfg.seed, "config loaded");
    Ok(cfg)
}
