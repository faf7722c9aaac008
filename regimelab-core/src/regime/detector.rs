//! Statistical regime detector over a sliding return window.
//!
//! Classification cascade, evaluated in this exact order:
//!   1. TREND: `|mean| > trend_factor * sqrt(var)` and entropy below threshold
//!   2. VOLATILE: `var > 5 * mean(|ret|)` and entropy at/above threshold
//!   3. MEAN_REVERT: everything else
//! The conditions are not mutually exclusive; the order is part of the
//! contract. Until the window fills, `detect()` reports VOLATILE as a
//! conservative default.

use std::collections::VecDeque;

use crate::domain::Regime;
use crate::regime::EntropyCalculator;

/// Dispersion multiple for the VOLATILE gate: variance must exceed this
/// multiple of the mean absolute return.
const DISPERSION_FACTOR: f64 = 5.0;

/// Cap on the entropy sub-window relative to the return window.
const ENTROPY_WINDOW_CAP: usize = 20;

/// Return-statistics regime classifier.
///
/// Owns a FIFO return window of capacity `window` and an entropy calculator
/// over the shorter `min(window, 20)` sub-window. Only TREND, MEAN_REVERT,
/// and VOLATILE are ever emitted; the rest of the [`Regime`] vocabulary is
/// reserved for externally forced paths.
#[derive(Debug, Clone)]
pub struct RegimeDetector {
    window: usize,
    entropy_threshold: f64,
    trend_factor: f64,
    entropy: EntropyCalculator,
    returns: VecDeque<f64>,
}

impl RegimeDetector {
    pub fn new(window: usize, entropy_bins: usize, entropy_threshold: f64, trend_factor: f64) -> Self {
        assert!(window >= 2, "detector window must be >= 2");
        Self {
            window,
            entropy_threshold,
            trend_factor,
            entropy: EntropyCalculator::new(entropy_bins, window.min(ENTROPY_WINDOW_CAP)),
            returns: VecDeque::with_capacity(window),
        }
    }

    /// Append a return, evicting FIFO at capacity.
    pub fn update(&mut self, ret: f64) {
        self.returns.push_back(ret);
        if self.returns.len() > self.window {
            self.returns.pop_front();
        }
    }

    /// Whether the window has filled to capacity.
    pub fn is_warm(&self) -> bool {
        self.returns.len() >= self.window
    }

    pub fn window_len(&self) -> usize {
        self.returns.len()
    }

    /// Classify the current window.
    pub fn detect(&self) -> Regime {
        if !self.is_warm() {
            return Regime::Volatile;
        }

        let rets: Vec<f64> = self.returns.iter().copied().collect();
        let n = rets.len() as f64;
        let mean = rets.iter().sum::<f64>() / n;
        let var = rets.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        let entropy = self.entropy.normalized_entropy(&rets);

        // Strong directional drift with low disorder. With zero variance the
        // bound is 0, so any nonzero mean qualifies.
        if mean.abs() > self.trend_factor * var.sqrt() && entropy < self.entropy_threshold {
            return Regime::Trend;
        }

        // High dispersion with high disorder.
        let mean_abs = rets.iter().map(|r| r.abs()).sum::<f64>() / n;
        if var > DISPERSION_FACTOR * mean_abs && entropy >= self.entropy_threshold {
            return Regime::Volatile;
        }

        Regime::MeanRevert
    }
}

impl Default for RegimeDetector {
    fn default() -> Self {
        Self::new(100, 10, 0.5, 2.0)
    }
}
