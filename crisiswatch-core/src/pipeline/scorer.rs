//! RiskScorer — signal count (and optionally volatility) to a bounded score.
//!
//! score = min(signal_count * 25, 100)
//! with adjustment: score = min(score + volatility_percent / 100 * 10, 100)
//!
//! The adjustment is off unless enabled; it moves scores near the tier
//! breakpoints (e.g. two signals at 25% volatility: 50 → 52.5, still High).

use crate::domain::RiskAssessment;

pub const POINTS_PER_SIGNAL: f64 = 25.0;
pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskScorer {
    volatility_adjustment: bool,
}

impl RiskScorer {
    /// Base variant: score depends on the signal count only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volatility_adjustment(enabled: bool) -> Self {
        Self {
            volatility_adjustment: enabled,
        }
    }

    pub fn volatility_adjustment(&self) -> bool {
        self.volatility_adjustment
    }

    pub fn score(&self, signal_count: usize, volatility_percent: f64) -> RiskAssessment {
        let mut score = (signal_count as f64 * POINTS_PER_SIGNAL).min(MAX_SCORE);

        if self.volatility_adjustment && volatility_percent.is_finite() {
            score = (score + volatility_percent.max(0.0) / 100.0 * 10.0).min(MAX_SCORE);
        }

        RiskAssessment::from_score(score)
    }
}
