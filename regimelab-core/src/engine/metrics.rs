//! Equity-curve statistics.
//!
//! Pure functions: equity curve in, scalar out. No dependency on the
//! pipeline or the account. Drawdowns are positive fractions here, matching
//! the attribution tracker's convention.

/// Total return as a fraction: `(final - initial) / initial`.
///
/// 0.0 for curves shorter than two points or a non-positive start.
pub fn total_return(equity_curve: &[f64]) -> f64 {
    if equity_curve.len() < 2 {
        return 0.0;
    }
    let initial = equity_curve[0];
    if initial <= 0.0 {
        return 0.0;
    }
    (equity_curve[equity_curve.len() - 1] - initial) / initial
}

/// Maximum fractional decline from a running peak, as a positive fraction.
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd = 0.0_f64;
    for &equity in equity_curve {
        peak = peak.max(equity);
        if peak > 0.0 {
            max_dd = max_dd.max((peak - equity) / peak);
        }
    }
    max_dd
}

/// Per-tick Sharpe ratio: `mean(returns) / std(returns)`, not annualized
/// (ticks carry no calendar).
///
/// 0.0 with fewer than two returns or zero dispersion.
pub fn sharpe_ratio(equity_curve: &[f64]) -> f64 {
    let returns = tick_returns(equity_curve);
    if returns.len() < 2 {
        return 0.0;
    }
    let mean = mean(&returns);
    let std = std_dev(&returns);
    if std < 1e-15 {
        return 0.0;
    }
    mean / std
}

/// Fractional tick-over-tick returns. Ticks with a non-positive previous
/// equity contribute 0.0.
fn tick_returns(equity_curve: &[f64]) -> Vec<f64> {
    equity_curve
        .windows(2)
        .map(|w| {
            if w[0] > 0.0 {
                (w[1] - w[0]) / w[0]
            } else {
                0.0
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}
