//! Regime-conditioned directional signal.

use crate::domain::Regime;

/// Per-regime strength multiplier for trend following.
const TREND_SCALE: f64 = 10.0;
/// Per-regime strength multiplier for fading moves.
const REVERT_SCALE: f64 = 8.0;

/// Directional decision: direction in {-1, 0, +1} and confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    pub direction: i32,
    pub strength: f64,
}

impl Signal {
    pub const FLAT: Signal = Signal {
        direction: 0,
        strength: 0.0,
    };

    pub fn is_flat(&self) -> bool {
        self.direction == 0
    }
}

/// Pure signal generator: (return, regime, volatility) in, signal out.
///
/// Sign resolution treats a zero return as negative (`ret > 0` picks the
/// positive branch, everything else the negative one). The branch structure
/// is part of the contract; keep it bit-for-bit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalGenerator;

impl SignalGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a directional signal for the current tick.
    ///
    /// - TREND: follow the return; strength `min(|ret| * 10, 1)`.
    /// - MEAN_REVERT: fade the return; strength `min(|ret| * 8, 1)`.
    /// - VOLATILE: trade only when `|ret| > volatility`; strength
    ///   `min(|ret| / volatility, 1)`.
    /// - Every other regime: flat.
    pub fn generate(&self, ret: f64, regime: Regime, volatility: Option<f64>) -> Signal {
        match regime {
            Regime::Trend => Signal {
                direction: if ret > 0.0 { 1 } else { -1 },
                strength: (ret.abs() * TREND_SCALE).min(1.0),
            },
            Regime::MeanRevert => Signal {
                direction: if ret > 0.0 { -1 } else { 1 },
                strength: (ret.abs() * REVERT_SCALE).min(1.0),
            },
            Regime::Volatile => match volatility {
                Some(vol) if ret.abs() > vol => Signal {
                    direction: if ret > 0.0 { 1 } else { -1 },
                    strength: (ret.abs() / vol).min(1.0),
                },
                _ => Signal::FLAT,
            },
            _ => Signal::FLAT,
        }
    }
}
