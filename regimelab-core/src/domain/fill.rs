use serde::{Deserialize, Serialize};

/// Order direction. Buys pay slippage, sells receive less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// +1.0 for buys, -1.0 for sells.
    pub fn signum(self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }

    /// Side of a signed position delta. Zero deltas map to `Buy`.
    pub fn of_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Side::Sell
        } else {
            Side::Buy
        }
    }
}

/// Result of simulating one (child) order through the execution cost models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillRecord {
    /// Signed quantity actually filled.
    pub qty: f64,
    /// Executed price after latency drift and slippage.
    pub price: f64,
    /// Simulated in-flight latency.
    pub latency_ms: u64,
}
