//! SignalDetector — fixed threshold predicates over a `MarketSummary`.
//!
//! Evaluated in order, each appending its signal when true:
//! 1. volatility_percent > 20   → High Volatility
//! 2. price_change_percent < -5 → Sharp Decline
//! 3. price_change_percent < -2 → Negative Momentum
//!
//! 2 and 3 layer: any decline below -5% fires both.

use super::AnalysisError;
use crate::domain::{CrisisSignal, MarketSummary, SignalReport};

pub const HIGH_VOLATILITY_PCT: f64 = 20.0;
pub const SHARP_DECLINE_PCT: f64 = -5.0;
pub const NEGATIVE_MOMENTUM_PCT: f64 = -2.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SignalDetector;

impl SignalDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, summary: &MarketSummary) -> SignalReport {
        let mut fired = Vec::with_capacity(CrisisSignal::ALL.len());

        if summary.volatility_percent > HIGH_VOLATILITY_PCT {
            fired.push(CrisisSignal::HighVolatility);
        }
        if summary.price_change_percent < SHARP_DECLINE_PCT {
            fired.push(CrisisSignal::SharpDecline);
        }
        if summary.price_change_percent < NEGATIVE_MOMENTUM_PCT {
            fired.push(CrisisSignal::NegativeMomentum);
        }

        SignalReport::new(fired)
    }

    /// Errors pass through untouched.
    pub fn detect_result(
        &self,
        summary: &Result<MarketSummary, AnalysisError>,
    ) -> Result<SignalReport, AnalysisError> {
        match summary {
            Ok(s) => Ok(self.detect(s)),
            Err(e) => Err(e.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DataMode;

    fn summary(volatility: f64, change: f64) -> MarketSummary {
        MarketSummary {
            symbol: "TEST".into(),
            current_price: 100.0,
            price_change_percent: change,
            volatility_percent: volatility,
            volume: 0,
            mode: DataMode::Real,
        }
    }

    #[test]
    fn calm_market_fires_nothing() {
        let report = SignalDetector.detect(&summary(10.0, 1.0));
        assert!(report.is_empty());
        assert_eq!(report.signal_count(), 0);
    }

    #[test]
    fn sharp_decline_layers_with_negative_momentum() {
        let report = SignalDetector.detect(&summary(10.0, -6.0));
        assert_eq!(
            report.signals(),
            &[CrisisSignal::SharpDecline, CrisisSignal::NegativeMomentum]
        );
        assert_eq!(report.signal_count(), 2);
    }

    #[test]
    fn mild_decline_is_momentum_only() {
        let report = SignalDetector.detect(&summary(10.0, -3.0));
        assert_eq!(report.signals(), &[CrisisSignal::NegativeMomentum]);
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(SignalDetector.detect(&summary(20.0, -2.0)).is_empty());
        let at_five = SignalDetector.detect(&summary(20.0, -5.0));
        assert_eq!(at_five.signals(), &[CrisisSignal::NegativeMomentum]);
    }

    #[test]
    fn everything_fires_in_evaluation_order() {
        let report = SignalDetector.detect(&summary(25.0, -6.0));
        assert_eq!(report.signals(), &CrisisSignal::ALL);
        assert_eq!(report.signal_count(), 3);
    }

    #[test]
    fn errors_pass_through() {
        let err = AnalysisError::DataUnavailable("No data found for symbol: X".into());
        let out = SignalDetector.detect_result(&Err(err.clone()));
        assert_eq!(out, Err(err));
    }
}
