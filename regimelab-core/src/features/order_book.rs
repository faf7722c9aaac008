//! Top-N order book snapshot.

use serde::{Deserialize, Serialize};

/// One price level of depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: f64,
    pub size: u64,
}

impl BookLevel {
    pub fn new(price: f64, size: u64) -> Self {
        Self { price, size }
    }
}

/// Depth snapshot retaining the top N levels per side.
///
/// Levels are kept in the order supplied; callers are responsible for
/// passing best-first sorted levels. No sorting happens here.
#[derive(Debug, Clone)]
pub struct OrderBook {
    levels: usize,
    bids: Vec<BookLevel>,
    asks: Vec<BookLevel>,
}

impl OrderBook {
    pub fn new(levels: usize) -> Self {
        assert!(levels >= 1, "book depth must be >= 1");
        Self {
            levels,
            bids: Vec::with_capacity(levels),
            asks: Vec::with_capacity(levels),
        }
    }

    /// Replace both sides, truncating to the configured depth.
    pub fn update(&mut self, bids: &[BookLevel], asks: &[BookLevel]) {
        self.bids.clear();
        self.bids.extend_from_slice(&bids[..bids.len().min(self.levels)]);
        self.asks.clear();
        self.asks.extend_from_slice(&asks[..asks.len().min(self.levels)]);
    }

    /// Volume imbalance across retained levels:
    /// `(bid_vol - ask_vol) / (bid_vol + ask_vol)`, 0.0 when both are empty.
    pub fn imbalance(&self) -> f64 {
        let bid_vol: u64 = self.bids.iter().map(|l| l.size).sum();
        let ask_vol: u64 = self.asks.iter().map(|l| l.size).sum();
        let total = bid_vol + ask_vol;
        if total == 0 {
            return 0.0;
        }
        (bid_vol as f64 - ask_vol as f64) / total as f64
    }

    pub fn bids(&self) -> &[BookLevel] {
        &self.bids
    }

    pub fn asks(&self) -> &[BookLevel] {
        &self.asks
    }

    pub fn depth(&self) -> usize {
        self.levels
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new(3)
    }
}
