//! Order-flow toxicity from return-sign persistence.

use std::collections::VecDeque;

/// Minimum samples before a score is reported.
const MIN_SAMPLES: usize = 5;

/// Short-horizon adverse-selection proxy.
///
/// Holds a FIFO window of signed returns and scores the fraction of
/// consecutive same-sign pairs. Persistent one-directional flow scores near
/// 1.0; choppy flow scores near 0.0.
#[derive(Debug, Clone)]
pub struct ToxicityEstimator {
    window: usize,
    returns: VecDeque<f64>,
}

impl ToxicityEstimator {
    pub fn new(window: usize) -> Self {
        assert!(window >= MIN_SAMPLES, "toxicity window must be >= 5");
        Self {
            window,
            returns: VecDeque::with_capacity(window),
        }
    }

    pub fn update(&mut self, ret: f64) {
        self.returns.push_back(ret);
        if self.returns.len() > self.window {
            self.returns.pop_front();
        }
    }

    /// Fraction of consecutive same-sign return pairs, in [0, 1].
    ///
    /// Returns 0.0 below 5 samples (cold start). A pair counts as same-sign
    /// only when the product is strictly positive, so zero returns break
    /// streaks.
    pub fn toxicity_score(&self) -> f64 {
        let n = self.returns.len();
        if n < MIN_SAMPLES {
            return 0.0;
        }
        let same_dir = self
            .returns
            .iter()
            .zip(self.returns.iter().skip(1))
            .filter(|(a, b)| *a * *b > 0.0)
            .count();
        same_dir as f64 / (n - 1) as f64
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

impl Default for ToxicityEstimator {
    fn default() -> Self {
        Self::new(20)
    }
}
