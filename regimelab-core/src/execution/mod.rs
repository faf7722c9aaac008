//! Execution cost simulation.
//!
//! Three independent models compose into a realistic fill:
//! latency (delay plus adverse in-flight drift), slippage (size- and
//! liquidity-driven impact), and partial fills (liquidity-, size-, and
//! noise-driven fill ratio). `ExecutionModel` bundles them for single
//! parent orders; `TwapExecutor` slices a parent into child orders.
//!
//! Every stochastic draw comes from a caller-injected RNG; nothing here
//! holds hidden random state.

mod fill;
mod latency;
mod slippage;
mod twap;

pub use fill::PartialFillModel;
pub use latency::LatencyModel;
pub use slippage::SlippageModel;
pub use twap::TwapExecutor;

use rand::Rng;

use crate::domain::{FillRecord, Regime, Side};

/// Outcome of pushing one order decision through the cost models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutionOutcome {
    /// Fraction of the requested delta that executes, in [0, 1].
    pub fill_ratio: f64,
    /// Executed price after latency drift and slippage.
    pub price: f64,
    /// Simulated in-flight latency.
    pub latency_ms: u64,
}

impl ExecutionOutcome {
    /// Fill record for a requested signed delta.
    pub fn fill_record(&self, requested_delta: f64) -> FillRecord {
        FillRecord {
            qty: requested_delta * self.fill_ratio,
            price: self.price,
            latency_ms: self.latency_ms,
        }
    }
}

/// Latency, slippage, and partial-fill models composed in order.
#[derive(Debug, Clone, Default)]
pub struct ExecutionModel {
    latency: LatencyModel,
    slippage: SlippageModel,
    filler: PartialFillModel,
}

impl ExecutionModel {
    pub fn new(latency: LatencyModel, slippage: SlippageModel, filler: PartialFillModel) -> Self {
        Self {
            latency,
            slippage,
            filler,
        }
    }

    /// Simulate execution of a signed position delta at the current mid.
    ///
    /// Sequencing: sample latency (regime-aware), drift the mid adversely
    /// over the latency window, apply side-signed slippage to the drifted
    /// price, then draw the fill ratio for the order size.
    pub fn execute<R: Rng>(
        &self,
        delta: f64,
        mid_price: f64,
        volatility: f64,
        liquidity_score: f64,
        regime: Regime,
        rng: &mut R,
    ) -> ExecutionOutcome {
        let latency_ms = self.latency.sample_latency(Some(regime), rng);
        let drifted = self.latency.apply_price_drift(mid_price, latency_ms, volatility);
        let price = self.slippage.apply(
            drifted,
            delta.abs(),
            liquidity_score,
            Side::of_delta(delta),
            Some(regime),
        );
        let fill_ratio = self.filler.fill_ratio(liquidity_score, delta.abs(), rng);
        ExecutionOutcome {
            fill_ratio,
            price,
            latency_ms,
        }
    }

    pub fn latency(&self) -> &LatencyModel {
        &self.latency
    }

    pub fn slippage(&self) -> &SlippageModel {
        &self.slippage
    }
}
