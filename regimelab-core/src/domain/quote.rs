use serde::{Deserialize, Serialize};

/// Top-of-book quote delivered once per tick.
///
/// `ask >= bid` is not enforced. Callers may deliver crossed quotes; derived
/// quantities are clamped downstream, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: f64,
    pub ask: f64,
    pub bid_size: u64,
    pub ask_size: u64,
}

impl Quote {
    pub fn new(bid: f64, ask: f64, bid_size: u64, ask_size: u64) -> Self {
        Self {
            bid,
            ask,
            bid_size,
            ask_size,
        }
    }
}
