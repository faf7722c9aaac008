//! Partial-fill simulation.

use rand::Rng;

/// Floor on the order-size penalty: even the largest orders keep 10% of
/// their liquidity-implied fill.
const SIZE_PENALTY_FLOOR: f64 = 0.1;
const NOISE_LO: f64 = 0.6;
const NOISE_HI: f64 = 1.0;

/// Fill-ratio model: thinner liquidity and larger orders fill worse.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialFillModel;

impl PartialFillModel {
    pub fn new() -> Self {
        Self
    }

    /// Fraction of the requested quantity that executes, in [0, 1].
    ///
    /// `clamp(liquidity, 0, 1) * max(0.1, 1 - order_size) * U(0.6, 1.0)`.
    pub fn fill_ratio<R: Rng>(&self, liquidity_score: f64, order_size: f64, rng: &mut R) -> f64 {
        let base = liquidity_score.clamp(0.0, 1.0);
        let size_penalty = (1.0 - order_size).max(SIZE_PENALTY_FLOOR);
        let noise = rng.gen_range(NOISE_LO..=NOISE_HI);
        (base * size_penalty * noise).clamp(0.0, 1.0)
    }
}
