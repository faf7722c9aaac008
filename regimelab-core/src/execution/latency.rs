//! Order latency simulation and in-flight price drift.

use rand::Rng;

use crate::domain::Regime;

/// Uniform latency sampler with regime amplification.
#[derive(Debug, Clone, Copy)]
pub struct LatencyModel {
    min_ms: u64,
    max_ms: u64,
}

impl LatencyModel {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        assert!(min_ms <= max_ms, "latency bounds inverted");
        Self { min_ms, max_ms }
    }

    /// Sample a latency in milliseconds, uniform over `[min_ms, max_ms]`.
    ///
    /// Doubled under VOLATILE: congested books acknowledge slower.
    pub fn sample_latency<R: Rng>(&self, regime: Option<Regime>, rng: &mut R) -> u64 {
        let latency = rng.gen_range(self.min_ms..=self.max_ms);
        match regime {
            Some(Regime::Volatile) => latency * 2,
            _ => latency,
        }
    }

    /// Adverse price movement while the order is in flight:
    /// `price * (1 + volatility * latency / 1000)`.
    pub fn apply_price_drift(&self, price: f64, latency_ms: u64, volatility: f64) -> f64 {
        price * (1.0 + volatility * latency_ms as f64 / 1000.0)
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_within_bounds() {
        let model = LatencyModel::new(1, 10);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let l = model.sample_latency(None, &mut rng);
            assert!((1..=10).contains(&l));
        }
    }

    #[test]
    fn volatile_doubles_latency() {
        let model = LatencyModel::new(5, 5);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(model.sample_latency(Some(Regime::Volatile), &mut rng), 10);
        assert_eq!(model.sample_latency(Some(Regime::Trend), &mut rng), 5);
        assert_eq!(model.sample_latency(None, &mut rng), 5);
    }

    #[test]
    fn drift_formula_is_exact() {
        let model = LatencyModel::default();
        // 100 * (1 + 0.02 * 50/1000) = 100.1
        let drifted = model.apply_price_drift(100.0, 50, 0.02);
        assert!((drifted - 100.1).abs() < 1e-12);
    }

    #[test]
    fn zero_volatility_means_no_drift() {
        let model = LatencyModel::default();
        assert_eq!(model.apply_price_drift(100.0, 500, 0.0), 100.0);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let model = LatencyModel::new(1, 100);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                model.sample_latency(None, &mut a),
                model.sample_latency(None, &mut b)
            );
        }
    }

    #[test]
    #[should_panic(expected = "latency bounds inverted")]
    fn inverted_bounds_rejected() {
        LatencyModel::new(10, 1);
    }
}
