//! Lot configuration structures.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{AllocationStrategy, AppResult, GridModel};

/// Environment variable naming the JSON config file read by [`LotConfig::from_env`].
pub const CONFIG_PATH_ENV: &str = "PARKING_GRID_CONFIG";

/// Diagnostic sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsConfig {
    /// Forward operation traces to `tracing`.
    #[default]
    Tracing,
    /// Drop operation traces.
    Null,
}

/// Lot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotConfig {
    /// Spot codes indexed `[floor][row][col]`: 0 inactive, 2 two-wheeler, 4 four-wheeler.
    pub layout: Vec<Vec<Vec<u8>>>,
    /// Strategy id used when a request does not name one.
    #[serde(default)]
    pub default_strategy: u8,
    /// Diagnostic sink selection.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl LotConfig {
    /// Config for `layout` with default strategy and diagnostics.
    #[must_use]
    pub fn new(layout: Vec<Vec<Vec<u8>>>) -> Self {
        Self {
            layout,
            default_strategy: 0,
            diagnostics: DiagnosticsConfig::default(),
        }
    }

    /// Validate layout shape, spot codes and strategy id.
    pub fn validate(&self) -> Result<(), String> {
        GridModel::new(&self.layout).map_err(|e| format!("layout invalid: {e}"))?;
        AllocationStrategy::try_from(self.default_strategy)
            .map_err(|e| format!("default_strategy invalid: {e}"))?;
        Ok(())
    }

    /// Parse lot configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .with_context(|| format!("reading lot config {}", path.display()))?;
        Self::from_json_str(&input)
            .map_err(|e| anyhow::anyhow!("lot config {}: {e}", path.display()))
    }

    /// Load `.env` if present, then read the file named by [`CONFIG_PATH_ENV`].
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let path = std::env::var(CONFIG_PATH_ENV)
            .with_context(|| format!("{CONFIG_PATH_ENV} is not set"))?;
        Self::from_json_file(path)
    }
}
