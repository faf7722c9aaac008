use serde::{Deserialize, Serialize};

/// Account snapshot appended after every executed simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub cash: f64,
    pub position: f64,
    pub equity: f64,
}
