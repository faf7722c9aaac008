//! Per-regime PnL, drawdown, and trade-count attribution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::Regime;

const PEAK_EPSILON: f64 = 1e-6;

/// Final attribution report, keyed by regime label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributionReport {
    pub pnl: HashMap<Regime, f64>,
    pub max_drawdown: HashMap<Regime, f64>,
    pub trades: HashMap<Regime, usize>,
}

/// Running per-regime attribution accumulator.
///
/// Each tick's delta equity is booked under the regime observed on that
/// tick, even though it realizes a decision made under the previous tick's
/// regime. That off-by-one is part of the contract. Buckets are created
/// lazily on first observation of a regime; the very first update only
/// records the baseline equity and seeds the observed regime's
/// peak/drawdown/trade slots without computing PnL.
#[derive(Debug, Clone, Default)]
pub struct RegimePnlTracker {
    last_equity: Option<f64>,
    pnl: HashMap<Regime, f64>,
    peak: HashMap<Regime, f64>,
    drawdown: HashMap<Regime, f64>,
    trades: HashMap<Regime, usize>,
}

impl RegimePnlTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book this tick's equity under `regime`.
    ///
    /// Per-regime peaks track the maximum equity observed while *in* that
    /// regime; drawdown is the running maximum fractional decline from that
    /// per-regime peak.
    pub fn update(&mut self, regime: Regime, equity: f64, traded: bool) {
        let last = match self.last_equity {
            Some(last) => last,
            None => {
                self.last_equity = Some(equity);
                self.peak.entry(regime).or_insert(equity);
                self.drawdown.entry(regime).or_insert(0.0);
                self.trades.entry(regime).or_insert(0);
                return;
            }
        };

        let pnl = equity - last;
        *self.pnl.entry(regime).or_insert(0.0) += pnl;

        if traded {
            *self.trades.entry(regime).or_insert(0) += 1;
        }

        let peak = self.peak.entry(regime).or_insert(equity);
        *peak = peak.max(equity);
        let peak = *peak;

        let dd = (peak - equity) / peak.max(PEAK_EPSILON);
        let slot = self.drawdown.entry(regime).or_insert(0.0);
        *slot = slot.max(dd);

        self.last_equity = Some(equity);
    }

    /// Snapshot of the three per-regime mappings.
    pub fn report(&self) -> AttributionReport {
        AttributionReport {
            pnl: self.pnl.clone(),
            max_drawdown: self.drawdown.clone(),
            trades: self.trades.clone(),
        }
    }

    /// Drop all state, including the baseline equity.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
