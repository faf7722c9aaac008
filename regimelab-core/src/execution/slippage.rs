//! Market-impact slippage.

use crate::domain::{Regime, Side};

const LIQUIDITY_EPSILON: f64 = 1e-6;

/// Size- and liquidity-driven price impact model.
///
/// Impact scales linearly with quantity and inversely with the liquidity
/// score, amplified 2x under VOLATILE and damped to 0.5x under QUIET. Buys
/// pay more, sells receive less.
#[derive(Debug, Clone, Copy)]
pub struct SlippageModel {
    base_slippage: f64,
}

impl SlippageModel {
    pub fn new(base_slippage: f64) -> Self {
        assert!(base_slippage >= 0.0, "base_slippage must be >= 0");
        Self { base_slippage }
    }

    /// Executed price for `qty` at `price` given current liquidity.
    ///
    /// `impact = base * qty / max(liquidity, eps)`, regime-adjusted, then
    /// `price * (1 + side * impact)`.
    pub fn apply(
        &self,
        price: f64,
        qty: f64,
        liquidity_score: f64,
        side: Side,
        regime: Option<Regime>,
    ) -> f64 {
        let liquidity = liquidity_score.max(LIQUIDITY_EPSILON);
        let mut impact = self.base_slippage * qty / liquidity;

        match regime {
            Some(Regime::Volatile) => impact *= 2.0,
            Some(Regime::Quiet) => impact *= 0.5,
            _ => {}
        }

        price * (1.0 + side.signum() * impact)
    }

    pub fn base_slippage(&self) -> f64 {
        self.base_slippage
    }
}

impl Default for SlippageModel {
    fn default() -> Self {
        Self::new(1e-4)
    }
}
