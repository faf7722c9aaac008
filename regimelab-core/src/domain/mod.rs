//! Domain types: quotes, regimes, feature sets, fills, ledger entries.

mod feature_set;
mod fill;
mod ledger;
mod quote;
mod regime;

pub use feature_set::FeatureSet;
pub use fill::{FillRecord, Side};
pub use ledger::LedgerEntry;
pub use quote::Quote;
pub use regime::Regime;
