//! Market regime vocabulary.
//!
//! The statistical detector emits only `Trend`, `MeanRevert`, and `Volatile`.
//! `Illiquid`, `Shock`, and `Quiet` exist in the vocabulary because strategy
//! parameters and the execution cost models branch on them; they are produced
//! only by externally forced regime paths, never by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete label classifying current market dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regime {
    Trend,
    MeanRevert,
    Volatile,
    Illiquid,
    Shock,
    Quiet,
}

impl Regime {
    /// All labels, detector-emitted or not.
    pub const ALL: [Regime; 6] = [
        Regime::Trend,
        Regime::MeanRevert,
        Regime::Volatile,
        Regime::Illiquid,
        Regime::Shock,
        Regime::Quiet,
    ];

    /// Stable string label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Trend => "TREND",
            Regime::MeanRevert => "MEAN_REVERT",
            Regime::Volatile => "VOLATILE",
            Regime::Illiquid => "ILLIQUID",
            Regime::Shock => "SHOCK",
            Regime::Quiet => "QUIET",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serialized_form() {
        for regime in Regime::ALL {
            let json = serde_json::to_string(&regime).unwrap();
            assert_eq!(json, format!("\"{}\"", regime.label()));
        }
    }

    #[test]
    fn round_trips_through_serde() {
        for regime in Regime::ALL {
            let json = serde_json::to_string(&regime).unwrap();
            let back: Regime = serde_json::from_str(&json).unwrap();
            assert_eq!(back, regime);
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Regime::MeanRevert.to_string(), "MEAN_REVERT");
        assert_eq!(Regime::Volatile.to_string(), "VOLATILE");
    }
}
