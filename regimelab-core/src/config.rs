//! Engine configuration: every knob with a default, TOML-loadable.
//!
//! All sections and fields are `serde(default)`, so a partial TOML file (or
//! an empty one) yields the reference configuration. `validate` enforces the
//! cross-field constraints the component constructors assert.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Regime;

/// Aggregate engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub detector: DetectorConfig,
    pub features: FeatureConfig,
    pub strategy: StrategyConfig,
    pub risk: RiskConfig,
    pub execution: ExecutionConfig,
    pub account: AccountConfig,
}

/// Regime detector thresholds and windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Return window capacity.
    pub window: usize,
    /// Histogram bins for the entropy metric.
    pub entropy_bins: usize,
    /// Normalized-entropy threshold separating ordered from disordered.
    pub entropy_threshold: f64,
    /// Mean-to-sigma ratio required to call a trend.
    pub trend_factor: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window: 100,
            entropy_bins: 10,
            entropy_threshold: 0.5,
            trend_factor: 2.0,
        }
    }
}

/// Microstructure estimator windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub liquidity_window: usize,
    pub toxicity_window: usize,
    pub depth_levels: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            liquidity_window: 50,
            toxicity_window: 20,
            depth_levels: 3,
        }
    }
}

/// Position sizing bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub max_position: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self { max_position: 1.0 }
    }
}

/// Risk governance limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Drawdown fraction that trips the kill switch.
    pub max_drawdown: f64,
    /// Global absolute exposure cap.
    pub max_exposure: f64,
    /// Optional per-regime exposure caps; absent regimes use the global cap.
    pub regime_limits: HashMap<Regime, f64>,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            max_drawdown: 0.05,
            max_exposure: 1.0,
            regime_limits: HashMap::new(),
        }
    }
}

/// Execution cost model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub base_slippage: f64,
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    pub twap_slices: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            base_slippage: 1e-4,
            latency_min_ms: 1,
            latency_max_ms: 10,
            twap_slices: 5,
        }
    }
}

/// Backtest account setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub initial_cash: f64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            initial_cash: 100_000.0,
        }
    }
}

/// Configuration rejection reasons.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("detector window must be >= 2, got {0}")]
    DetectorWindow(usize),

    #[error("entropy bin count must be >= 1, got {0}")]
    EntropyBins(usize),

    #[error("liquidity window must be >= 1, got {0}")]
    LiquidityWindow(usize),

    #[error("toxicity window must be >= 5, got {0}")]
    ToxicityWindow(usize),

    #[error("depth levels must be >= 1, got {0}")]
    DepthLevels(usize),

    #[error("max position must be > 0, got {0}")]
    MaxPosition(f64),

    #[error("max drawdown must be > 0, got {0}")]
    MaxDrawdown(f64),

    #[error("max exposure must be > 0, got {0}")]
    MaxExposure(f64),

    #[error("latency bounds inverted: {min}ms > {max}ms")]
    LatencyBounds { min: u64, max: u64 },

    #[error("base slippage must be >= 0, got {0}")]
    BaseSlippage(f64),

    #[error("twap slices must be >= 1, got {0}")]
    TwapSlices(usize),
}

impl EngineConfig {
    /// Parse and validate a TOML document. Missing sections and fields
    /// fall back to defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the constraints the component constructors assert.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.detector.window < 2 {
            return Err(ConfigError::DetectorWindow(self.detector.window));
        }
        if self.detector.entropy_bins < 1 {
            return Err(ConfigError::EntropyBins(self.detector.entropy_bins));
        }
        if self.features.liquidity_window < 1 {
            return Err(ConfigError::LiquidityWindow(self.features.liquidity_window));
        }
        if self.features.toxicity_window < 5 {
            return Err(ConfigError::ToxicityWindow(self.features.toxicity_window));
        }
        if self.features.depth_levels < 1 {
            return Err(ConfigError::DepthLevels(self.features.depth_levels));
        }
        if self.strategy.max_position <= 0.0 {
            return Err(ConfigError::MaxPosition(self.strategy.max_position));
        }
        if self.risk.max_drawdown <= 0.0 {
            return Err(ConfigError::MaxDrawdown(self.risk.max_drawdown));
        }
        if self.risk.max_exposure <= 0.0 {
            return Err(ConfigError::MaxExposure(self.risk.max_exposure));
        }
        if self.execution.latency_min_ms > self.execution.latency_max_ms {
            return Err(ConfigError::LatencyBounds {
                min: self.execution.latency_min_ms,
                max: self.execution.latency_max_ms,
            });
        }
        if self.execution.base_slippage < 0.0 {
            return Err(ConfigError::BaseSlippage(self.execution.base_slippage));
        }
        if self.execution.twap_slices < 1 {
            return Err(ConfigError::TwapSlices(self.execution.twap_slices));
        }
        Ok(())
    }

    /// Deterministic content hash of this configuration.
    ///
    /// Two runs with identical configs share a fingerprint, which is what
    /// downstream result caches key on.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("EngineConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
