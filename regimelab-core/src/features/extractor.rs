//! Quote-derived microstructure quantities.
//!
//! Every function here is pure. Clamping of non-positive mids and negative
//! spreads is the engine's job; crossed quotes pass through unmodified.

/// Arithmetic mean of best bid and best ask.
pub fn mid_price(bid: f64, ask: f64) -> f64 {
    (bid + ask) / 2.0
}

/// Best ask minus best bid. Negative for crossed quotes.
pub fn spread(bid: f64, ask: f64) -> f64 {
    ask - bid
}

/// Size imbalance at the top of book: `(bid - ask) / (bid + ask)`.
///
/// 0.0 when both sizes are zero.
pub fn order_imbalance(bid_size: u64, ask_size: u64) -> f64 {
    let denom = bid_size + ask_size;
    if denom == 0 {
        return 0.0;
    }
    (bid_size as f64 - ask_size as f64) / denom as f64
}

/// Mid-price change since the previous tick.
///
/// The first observation has no prior reference and yields 0.0. The caller
/// owns `prev_mid` and advances it with the raw (unclamped) mid.
pub fn price_return(prev_mid: Option<f64>, mid: f64) -> f64 {
    match prev_mid {
        Some(prev) => mid - prev,
        None => 0.0,
    }
}
