//! Entropy metrics over a return window.
//!
//! Returns are binned into B equal-width bins spanning [min, max] of the
//! most recent W values; bin counts are normalized to probabilities, and
//! zero-probability bins are discarded before taking logs. Below W
//! observations every metric reports 0.0 (cold start, not an error).

/// Shannon/Renyi entropy calculator over the most recent `window` returns.
#[derive(Debug, Clone, Copy)]
pub struct EntropyCalculator {
    bins: usize,
    window: usize,
}

impl EntropyCalculator {
    pub fn new(bins: usize, window: usize) -> Self {
        assert!(bins >= 1, "entropy bin count must be >= 1");
        assert!(window >= 1, "entropy window must be >= 1");
        Self { bins, window }
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Probability mass per bin over the most recent `window` values.
    ///
    /// A flat window (max == min) has no bin width to divide; all mass lands
    /// in a single bin.
    fn bin_probabilities(&self, values: &[f64]) -> Vec<f64> {
        let recent = &values[values.len() - self.window..];
        let lo = recent.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut counts = vec![0usize; self.bins];
        if hi - lo > 0.0 {
            let width = (hi - lo) / self.bins as f64;
            for &v in recent {
                // The maximum lands exactly on the upper edge; fold it into
                // the last bin.
                let idx = (((v - lo) / width) as usize).min(self.bins - 1);
                counts[idx] += 1;
            }
        } else {
            counts[0] = recent.len();
        }

        let n = recent.len() as f64;
        counts.into_iter().map(|c| c as f64 / n).collect()
    }

    /// Shannon entropy `-sum(p * ln p)` of the binned window.
    ///
    /// 0.0 with fewer than `window` observations.
    pub fn shannon_entropy(&self, returns: &[f64]) -> f64 {
        if returns.len() < self.window {
            return 0.0;
        }
        self.bin_probabilities(returns)
            .into_iter()
            .filter(|&p| p > 0.0)
            .map(|p| -p * p.ln())
            .sum()
    }

    /// Shannon entropy normalized by `ln(bins)` into [0, 1].
    ///
    /// 0.0 when a single bin makes the normalizer vanish.
    pub fn normalized_entropy(&self, returns: &[f64]) -> f64 {
        let max_entropy = (self.bins as f64).ln();
        if max_entropy <= 0.0 {
            return 0.0;
        }
        self.shannon_entropy(returns) / max_entropy
    }

    /// Renyi entropy of order `alpha`: `1/(1-alpha) * ln(sum(p^alpha))`.
    ///
    /// `alpha` must not equal 1 (the order-1 limit is Shannon entropy; this
    /// form degenerates there).
    pub fn renyi_entropy(&self, returns: &[f64], alpha: f64) -> f64 {
        assert!(
            (alpha - 1.0).abs() > f64::EPSILON,
            "renyi order must not be 1"
        );
        if returns.len() < self.window {
            return 0.0;
        }
        let sum: f64 = self
            .bin_probabilities(returns)
            .into_iter()
            .filter(|&p| p > 0.0)
            .map(|p| p.powf(alpha))
            .sum();
        sum.ln() / (1.0 - alpha)
    }

    /// Normalized entropy of every prefix of `returns`.
    ///
    /// Prefixes shorter than the window report 0.0.
    pub fn rolling_entropy(&self, returns: &[f64]) -> Vec<f64> {
        (0..returns.len())
            .map(|i| self.normalized_entropy(&returns[..=i]))
            .collect()
    }
}

impl Default for EntropyCalculator {
    fn default() -> Self {
        Self::new(10, 20)
    }
}
