//! Builder turning a [`LotConfig`] into a [`ParkingLot`].

use anyhow::anyhow;

use crate::config::{DiagnosticsConfig, LotConfig};
use crate::core::{
    AllocationStrategy, AppResult, DiagnosticSink, GridModel, NullSink, ParkingLot, TracingSink,
};

/// Builds a lot from configuration, optionally with a caller-supplied sink.
pub struct LotBuilder {
    config: LotConfig,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl LotBuilder {
    /// Start from `config`.
    #[must_use]
    pub fn new(config: LotConfig) -> Self {
        Self { config, sink: None }
    }

    /// Configuration the lot will be built from.
    #[must_use]
    pub const fn config(&self) -> &LotConfig {
        &self.config
    }

    /// Use `sink` instead of the one named by the configuration.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate the configuration and build the lot.
    pub fn build(self) -> AppResult<ParkingLot> {
        let strategy = AllocationStrategy::try_from(self.config.default_strategy)
            .map_err(|e| anyhow!("config invalid: {e}"))?;
        let grid =
            GridModel::new(&self.config.layout).map_err(|e| anyhow!("config invalid: {e}"))?;
        let sink: Box<dyn DiagnosticSink> = match self.sink {
            Some(sink) => sink,
            None => match self.config.diagnostics {
                DiagnosticsConfig::Tracing => Box::new(TracingSink::new()),
                DiagnosticsConfig::Null => Box::new(NullSink),
            },
        };
        tracing::debug!(
            "built lot: {} floors of {}x{}, default strategy {}",
            grid.floors(),
            grid.rows(),
            grid.cols(),
            strategy.id()
        );
        Ok(ParkingLot::from_grid(grid)
            .with_sink(sink)
            .with_default_strategy(strategy))
    }
}

/// Build a lot straight from configuration.
pub fn build_lot(cfg: &LotConfig) -> AppResult<ParkingLot> {
    LotBuilder::new(cfg.clone()).build()
}
