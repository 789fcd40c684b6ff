//! Configuration models for lot layout, strategy and diagnostics.

pub mod lot;

pub use lot::{DiagnosticsConfig, LotConfig, CONFIG_PATH_ENV};
