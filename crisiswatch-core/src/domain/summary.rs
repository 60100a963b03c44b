//! MarketSummary — the fixed reduction of one fetched price series.

use serde::{Deserialize, Serialize};

/// Whether the numbers came from market data or the demo random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataMode {
    Real,
    Demo,
}

/// Summary statistics for a single symbol over a lookback period.
///
/// Prices and percentages are rounded to 2 decimal places; volume is the last
/// bar's traded volume, truncated to an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub symbol: String,
    pub current_price: f64,
    pub price_change_percent: f64,
    pub volatility_percent: f64,
    pub volume: u64,
    pub mode: DataMode,
}

impl MarketSummary {
    pub fn is_demo(&self) -> bool {
        self.mode == DataMode::Demo
    }
}
