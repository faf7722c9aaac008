//! Per-tick orchestration: quote in, (mid, regime, features) out.

use crate::config::EngineConfig;
use crate::domain::{FeatureSet, Quote, Regime};
use crate::features::{extractor, LiquidityEstimator, OrderBook, ToxicityEstimator};
use crate::regime::RegimeDetector;

/// Floor for the clamped mid price.
const MIN_PRICE: f64 = 0.01;

/// What one tick produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub mid: f64,
    pub regime: Regime,
    pub features: FeatureSet,
}

/// Tick-processing pipeline.
///
/// `on_tick` sequences feature extraction, clamping, estimator updates, and
/// regime detection, mutating every owned window exactly once per call.
/// Malformed quotes (ask < bid, non-positive prices) are clamped, never
/// rejected. Not safe for concurrent invocation; the driver must deliver
/// ticks serially.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    prev_mid: Option<f64>,
    book: OrderBook,
    liquidity: LiquidityEstimator,
    toxicity: ToxicityEstimator,
    detector: RegimeDetector,
}

impl SimulationEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            prev_mid: None,
            book: OrderBook::new(config.features.depth_levels),
            liquidity: LiquidityEstimator::new(config.features.liquidity_window),
            toxicity: ToxicityEstimator::new(config.features.toxicity_window),
            detector: RegimeDetector::new(
                config.detector.window,
                config.detector.entropy_bins,
                config.detector.entropy_threshold,
                config.detector.trend_factor,
            ),
        }
    }

    /// Process one quote.
    ///
    /// The return is computed from the raw mid before clamping, and the raw
    /// mid becomes the next tick's reference; the clamped mid is what goes
    /// out. The clamped spread feeds the liquidity window; the raw return
    /// feeds the regime and toxicity windows.
    pub fn on_tick(&mut self, quote: &Quote) -> TickOutcome {
        let raw_mid = extractor::mid_price(quote.bid, quote.ask);
        let raw_spread = extractor::spread(quote.bid, quote.ask);
        let ret = extractor::price_return(self.prev_mid, raw_mid);
        self.prev_mid = Some(raw_mid);

        let mid = raw_mid.max(MIN_PRICE);
        let spread = raw_spread.max(0.0);

        self.liquidity
            .update(spread, quote.bid_size, quote.ask_size);
        self.detector.update(ret);
        self.toxicity.update(ret);

        let regime = self.detector.detect();

        let features = FeatureSet {
            ret,
            spread,
            liquidity: self.liquidity.liquidity_score().max(0.0),
            toxicity: self.toxicity.toxicity_score(),
        };

        TickOutcome {
            mid,
            regime,
            features,
        }
    }

    /// Depth snapshot, fed by the driver alongside quotes.
    pub fn order_book(&self) -> &OrderBook {
        &self.book
    }

    pub fn order_book_mut(&mut self) -> &mut OrderBook {
        &mut self.book
    }

    /// Whether the regime window has filled.
    pub fn is_warm(&self) -> bool {
        self.detector.is_warm()
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
