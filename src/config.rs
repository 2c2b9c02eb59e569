use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// Tunable selection parameters.
///
/// Loaded from a JSON file; any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Builder runs per diet type.
    pub attempts: usize,

    /// Early-stop band as a fraction of the target.
    pub tolerance: f64,

    /// Share of the vegetarian base sampled into meat and seafood pools.
    pub base_sample_fraction: f64,

    pub non_vegetarian_meat_ratio: f64,

    pub seafood_meat_ratio: f64,

    /// Width of the min/max band reported with each request.
    pub bound_tolerance: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            tolerance: DEFAULT_TOLERANCE,
            base_sample_fraction: BASE_SAMPLE_FRACTION,
            non_vegetarian_meat_ratio: NON_VEGETARIAN_MEAT_RATIO,
            seafood_meat_ratio: SEAFOOD_MEAT_RATIO,
            bound_tolerance: BOUND_TOLERANCE,
        }
    }
}

impl PlannerConfig {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.attempts == 0 {
            return Err(PlannerError::InvalidConfig(
                "attempts must be at least 1".to_string(),
            ));
        }

        for (name, value) in [
            ("tolerance", self.tolerance),
            ("bound_tolerance", self.bound_tolerance),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be in [0, 1), got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("base_sample_fraction", self.base_sample_fraction),
            ("non_vegetarian_meat_ratio", self.non_vegetarian_meat_ratio),
            ("seafood_meat_ratio", self.seafood_meat_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
