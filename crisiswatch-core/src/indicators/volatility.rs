//! Period-over-period returns and their volatility.
//!
//! returns[t] = close[t] / close[t-1] - 1
//! volatility = stdev(returns, n-1) * scale * 100
//!
//! `scale` is √252 for the annualized method and 1 for the raw method; the two
//! differ by a factor of about 15.87 and are not interchangeable.

use serde::{Deserialize, Serialize};

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// How return dispersion is turned into a volatility percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityMethod {
    /// Sample stdev of daily returns × √252 × 100.
    #[default]
    Annualized,
    /// Sample stdev of daily returns × 100.
    Raw,
}

impl VolatilityMethod {
    /// Volatility in percent. Fewer than two usable returns give 0.
    pub fn volatility_percent(self, closes: &[f64]) -> f64 {
        let returns = pct_returns(closes);
        let Some(sd) = sample_std_dev(&returns) else {
            return 0.0;
        };
        match self {
            VolatilityMethod::Annualized => sd * TRADING_DAYS_PER_YEAR.sqrt() * 100.0,
            VolatilityMethod::Raw => sd * 100.0,
        }
    }
}

/// Consecutive fractional returns. Non-finite returns (zero base) are dropped.
pub fn pct_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|w| w[1] / w[0] - 1.0)
        .filter(|r| r.is_finite())
        .collect()
}

/// Sample standard deviation (n-1 denominator). `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(var.sqrt())
}

/// Percentage change from `first` to `last`. `None` when `first` is not a positive price.
pub fn pct_change(first: f64, last: f64) -> Option<f64> {
    if !(first.is_finite() && first > 0.0) || !last.is_finite() {
        return None;
    }
    Some((last / first - 1.0) * 100.0)
}
