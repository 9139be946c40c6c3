use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settings for distribution normalization.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NormalizeConfig {
    /// Slack allowed outside [0, 1] when checking normalized probabilities.
    pub tolerance: f64,
}

impl NormalizeConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

impl FromStr for NormalizeConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(tolerance) if tolerance.is_finite() && tolerance >= 0.0 => {
                Ok(NormalizeConfig::new(tolerance))
            }
            Ok(tolerance) => Err(format!(
                "Invalid tolerance: {}. Tolerance must be a finite, non-negative number",
                tolerance
            )),
            Err(e) => Err(format!("Invalid tolerance '{}': {}", s, e)),
        }
    }
}
