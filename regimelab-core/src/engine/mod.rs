//! Engine: per-tick orchestration, the backtest ledger, and per-regime
//! PnL attribution.

mod accounting;
mod attribution;
pub mod metrics;
mod pipeline;

pub use accounting::BacktestAccount;
pub use attribution::{AttributionReport, RegimePnlTracker};
pub use pipeline::{SimulationEngine, TickOutcome};
