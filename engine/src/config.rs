//! Pool configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use streampool_types::{AccountId, PoolParams};

use crate::error::EngineError;

/// Configuration for a pool instance.
///
/// Can be loaded from a TOML file via [`PoolConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Identity of the pool owner: sole caller of the pool-accrual query
    /// and universal reader of per-account status.
    pub owner: AccountId,

    /// Reward units emitted per second.
    #[serde(default = "default_emission_rate")]
    pub emission_rate: u128,
}

fn default_emission_rate() -> u128 {
    1
}

impl PoolConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, EngineError> {
        let raw =
            std::fs::read_to_string(path).map_err(|e| EngineError::Config(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| EngineError::Config(e.to_string()))
    }

    pub fn params(&self) -> PoolParams {
        PoolParams::new(self.emission_rate)
    }
}
