//! Rolling liquidity score from spread history.

use std::collections::VecDeque;

const SPREAD_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DepthSample {
    spread: f64,
    // Recorded but not yet weighted into the score.
    #[allow(dead_code)]
    bid_size: u64,
    #[allow(dead_code)]
    ask_size: u64,
}

/// Inverse-average-spread liquidity estimator.
///
/// Holds a FIFO window of (spread, bid size, ask size) samples. The score is
/// `1 / (mean(spread) + eps)`: wider average spreads mean lower liquidity.
/// Sizes are recorded but not weighted into the score.
#[derive(Debug, Clone)]
pub struct LiquidityEstimator {
    window: usize,
    history: VecDeque<DepthSample>,
}

impl LiquidityEstimator {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "liquidity window must be >= 1");
        Self {
            window,
            history: VecDeque::with_capacity(window),
        }
    }

    /// Record one tick's spread and top-of-book sizes, evicting FIFO at
    /// capacity.
    pub fn update(&mut self, spread: f64, bid_size: u64, ask_size: u64) {
        self.history.push_back(DepthSample {
            spread,
            bid_size,
            ask_size,
        });
        if self.history.len() > self.window {
            self.history.pop_front();
        }
    }

    /// Liquidity score, finite and >= 0 for any non-negative spread history.
    ///
    /// Returns 0.0 on an empty history (cold start).
    pub fn liquidity_score(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let avg_spread =
            self.history.iter().map(|s| s.spread).sum::<f64>() / self.history.len() as f64;
        1.0 / (avg_spread + SPREAD_EPSILON)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for LiquidityEstimator {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_scores_zero() {
        let est = LiquidityEstimator::default();
        assert_eq!(est.liquidity_score(), 0.0);
    }

    #[test]
    fn tighter_spreads_score_higher() {
        let mut tight = LiquidityEstimator::new(10);
        let mut wide = LiquidityEstimator::new(10);
        for _ in 0..10 {
            tight.update(0.01, 10, 10);
            wide.update(0.10, 10, 10);
        }
        assert!(tight.liquidity_score() > wide.liquidity_score());
    }

    #[test]
    fn zero_spread_history_is_finite() {
        let mut est = LiquidityEstimator::new(5);
        for _ in 0..5 {
            est.update(0.0, 1, 1);
        }
        let score = est.liquidity_score();
        assert!(score.is_finite());
        assert!(score > 0.0);
    }

    #[test]
    fn window_evicts_fifo() {
        let mut est = LiquidityEstimator::new(3);
        est.update(1.0, 0, 0);
        for _ in 0..3 {
            est.update(0.1, 0, 0);
        }
        assert_eq!(est.len(), 3);
        // The 1.0 sample is gone; mean spread is 0.1.
        let expected = 1.0 / (0.1 + 1e-6);
        assert!((est.liquidity_score() - expected).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "liquidity window must be >= 1")]
    fn zero_window_rejected() {
        LiquidityEstimator::new(0);
    }
}
