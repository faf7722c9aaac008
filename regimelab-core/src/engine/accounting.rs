//! Cash/position/equity ledger for a single simulated instrument.

use crate::domain::LedgerEntry;

/// Unconstrained backtest account: no margin, no short-sale checks.
///
/// Equity is always derived (`cash + position * mid`); it changes only
/// through `mark_to_market`.
#[derive(Debug, Clone)]
pub struct BacktestAccount {
    initial_cash: f64,
    cash: f64,
    position: f64,
    equity: f64,
    history: Vec<LedgerEntry>,
}

impl BacktestAccount {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            initial_cash,
            cash: initial_cash,
            position: 0.0,
            equity: initial_cash,
            history: Vec::new(),
        }
    }

    /// Book a filled quantity at the executed price.
    pub fn execute_trade(&mut self, qty: f64, price: f64) {
        self.cash -= qty * price;
        self.position += qty;
    }

    /// Re-derive equity from the current mid.
    pub fn mark_to_market(&mut self, mid_price: f64) -> f64 {
        self.equity = self.cash + self.position * mid_price;
        self.equity
    }

    /// One simulation step: realize `target_delta * fill_ratio` at the
    /// executed price, mark to market at the mid, and snapshot the ledger.
    pub fn step(
        &mut self,
        target_delta: f64,
        mid_price: f64,
        fill_ratio: f64,
        executed_price: f64,
    ) -> f64 {
        let filled_qty = target_delta * fill_ratio;
        self.execute_trade(filled_qty, executed_price);

        let equity = self.mark_to_market(mid_price);
        self.history.push(LedgerEntry {
            cash: self.cash,
            position: self.position,
            equity,
        });
        equity
    }

    pub fn initial_cash(&self) -> f64 {
        self.initial_cash
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn equity(&self) -> f64 {
        self.equity
    }

    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }
}
