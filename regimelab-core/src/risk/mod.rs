//! Risk governance: drawdown kill switch and exposure caps.

mod governor;

pub use governor::RiskGovernor;
