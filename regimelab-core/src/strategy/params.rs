//! Per-regime strategy parameter mapping.
//!
//! This is the one consumer of the full regime vocabulary: SHOCK and
//! ILLIQUID never come out of the statistical detector, but forced regime
//! paths still need sizing and stop parameters for them.

use crate::domain::Regime;
use serde::{Deserialize, Serialize};

/// Sizing and stop parameters adapted to a regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Multiplier applied to base position size.
    pub position_scale: f64,
    /// Stop-loss distance in volatility units.
    pub stop_loss: f64,
}

impl StrategyParams {
    /// Parameters for a regime. Unmapped labels get the conservative
    /// defaults.
    pub fn for_regime(regime: Regime) -> Self {
        match regime {
            Regime::Trend => Self {
                position_scale: 1.5,
                stop_loss: 2.0,
            },
            Regime::MeanRevert => Self {
                position_scale: 0.7,
                stop_loss: 0.5,
            },
            Regime::Shock => Self {
                position_scale: 0.2,
                stop_loss: 0.2,
            },
            _ => Self {
                position_scale: 0.5,
                stop_loss: 1.0,
            },
        }
    }
}
