use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{RiskError, RiskResult};

/// Default values for the config sections.
pub mod defaults {
    /// Relative database path used when none is configured.
    pub const DEFAULT_DB_PATH: &str = "causeway.db";
}

/// Top-level Causeway configuration, loaded from TOML.
/// Every section and field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CausewayConfig {
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
    pub graph: GraphConfig,
}

/// Storage subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_DB_PATH),
        }
    }
}

/// Input validation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// When true, out-of-range probability/severity input is rejected.
    /// When false, it is accepted as-is and logged at warn level.
    /// Aggregation arithmetic never clamps either way.
    pub strict: bool,
}

/// Graph consistency configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// When true, a `causes` edit that would create a cycle is rejected.
    /// When false, cyclic references are aggregated with stale-read
    /// semantics: each recomputation uses whatever value is currently
    /// stored for the referenced entity.
    pub reject_cycles: bool,
}

impl CausewayConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> RiskResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| RiskError::Config {
            message: format!("read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> RiskResult<Self> {
        toml::from_str(raw).map_err(|e| RiskError::Config {
            message: e.to_string(),
        })
    }
}
