//! TWAP slicing: split a parent order into child orders.

use rand::Rng;

use crate::domain::{FillRecord, Side};
use crate::execution::{LatencyModel, PartialFillModel, SlippageModel};

/// Time-weighted execution: a parent quantity split into equal child
/// orders, each independently latency-sampled, slippage-adjusted, and
/// partially filled.
///
/// The effective slice count scales with liquidity: `max(1, floor(slices *
/// liquidity_score))`. Thin markets collapse toward a single slice.
#[derive(Debug, Clone)]
pub struct TwapExecutor {
    slices: usize,
    latency: LatencyModel,
    slippage: SlippageModel,
    filler: PartialFillModel,
}

impl TwapExecutor {
    pub fn new(
        slices: usize,
        latency: LatencyModel,
        slippage: SlippageModel,
        filler: PartialFillModel,
    ) -> Self {
        assert!(slices >= 1, "slice count must be >= 1");
        Self {
            slices,
            latency,
            slippage,
            filler,
        }
    }

    /// Number of child orders for the given liquidity.
    pub fn effective_slices(&self, liquidity_score: f64) -> usize {
        ((self.slices as f64 * liquidity_score) as usize).max(1)
    }

    /// Slice `total_qty` and simulate each child fill.
    ///
    /// Children are priced at the ask (`mid + spread/2`) before slippage.
    pub fn generate_orders<R: Rng>(
        &self,
        total_qty: f64,
        mid_price: f64,
        liquidity_score: f64,
        spread: f64,
        rng: &mut R,
    ) -> Vec<FillRecord> {
        let n = self.effective_slices(liquidity_score);
        let slice_qty = total_qty / n as f64;

        (0..n)
            .map(|_| {
                let latency_ms = self.latency.sample_latency(None, rng);
                let quoted = mid_price + spread / 2.0;
                let price =
                    self.slippage
                        .apply(quoted, slice_qty, liquidity_score, Side::Buy, None);
                let fill_ratio = self.filler.fill_ratio(liquidity_score, 1.0, rng);
                FillRecord {
                    qty: slice_qty * fill_ratio,
                    price,
                    latency_ms,
                }
            })
            .collect()
    }
}

impl Default for TwapExecutor {
    fn default() -> Self {
        Self::new(
            5,
            LatencyModel::default(),
            SlippageModel::default(),
            PartialFillModel::default(),
        )
    }
}
