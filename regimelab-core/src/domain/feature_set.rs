use serde::{Deserialize, Serialize};

/// Microstructure features assembled fresh on every tick.
///
/// `spread` and `liquidity` are non-negative; `toxicity` lies in [0, 1].
/// Nothing here persists across ticks except through the owning estimators'
/// window state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Mid-price change since the previous tick (0.0 on the first tick).
    #[serde(rename = "return")]
    pub ret: f64,
    pub spread: f64,
    pub liquidity: f64,
    pub toxicity: f64,
}
