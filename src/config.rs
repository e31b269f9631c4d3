use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{MessError, Result};

/// Configuration for a generation run.
///
/// Defaults reproduce the reference dataset: 800 students, the 2024
/// academic window, and a fixed seed so repeated runs are byte-identical.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Total student capacity of the mess.
    pub total_capacity: u32,

    /// First date of the simulated range (inclusive).
    pub start_date: NaiveDate,

    /// Last date of the simulated range (inclusive).
    pub end_date: NaiveDate,

    /// Seed for the single random stream consumed during generation.
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            total_capacity: 800,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid default date"),
            end_date: NaiveDate::from_ymd_opt(2024, 10, 24).expect("valid default date"),
            seed: 42,
        }
    }
}

impl GenerationConfig {
    /// Fail-fast validation, run before any generation starts.
    pub fn validate(&self) -> Result<()> {
        if self.total_capacity == 0 {
            return Err(MessError::InvalidConfig(
                "total_capacity must be positive".to_string(),
            ));
        }
        if self.end_date < self.start_date {
            return Err(MessError::InvalidConfig(format!(
                "end_date {} is before start_date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Number of calendar days in the configured range, inclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Load a config from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GenerationConfig> {
    let content = fs::read_to_string(path)?;
    let config: GenerationConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
