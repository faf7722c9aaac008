//! RegimeLab Core — regime-adaptive market-microstructure simulation engine.
//!
//! A single-instrument, tick-driven research pipeline:
//! - Microstructure features (mid, spread, imbalance, return) and rolling
//!   liquidity/toxicity estimators
//! - Entropy-based statistical regime detection
//! - Regime-conditioned signal generation and position sizing
//! - Risk governance (drawdown kill switch, exposure caps)
//! - Execution cost simulation (latency, slippage, partial fills, TWAP)
//! - Cash/position/equity ledger with per-regime PnL attribution
//!
//! The core is synchronous and single-threaded: one tick is fully processed
//! before the next begins, and no component locks internally. Randomness is
//! injected (`rng::SeedTree` + `rand::rngs::StdRng`), so a run is
//! reproducible given its master seed. Rendering, tick pacing, CSV export,
//! and orchestration binaries are external collaborators.

pub mod config;
pub mod domain;
pub mod engine;
pub mod execution;
pub mod features;
pub mod regime;
pub mod risk;
pub mod rng;
pub mod strategy;
