use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{TIER_MEDIUM_CEIL, TIER_MEDIUM_FLOOR};

/// Discrete risk classification derived from a probability, used only for
/// display labeling. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Classify a probability. Total over all f64 input: no clamping, so
    /// negative values are Low and values above 100 are High. Both
    /// boundary values (30 and 70) are Medium.
    pub fn for_probability(probability: f64) -> Self {
        if probability < TIER_MEDIUM_FLOOR {
            Self::Low
        } else if probability <= TIER_MEDIUM_CEIL {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
