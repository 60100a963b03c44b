//! Risk tiers and the per-symbol risk assessment.

use serde::Serialize;
use std::fmt;

/// Risk tier, ordered from least to most severe.
///
/// Tiers are left-closed intervals on the final score:
/// `[0,30)` Low, `[30,50)` Moderate, `[50,70)` High, `[70,100]` Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskClassification {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskClassification {
    /// Tier boundaries over the score range.
    pub const BREAKPOINTS: [f64; 5] = [0.0, 30.0, 50.0, 70.0, 100.0];

    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            RiskClassification::Low
        } else if score < 50.0 {
            RiskClassification::Moderate
        } else if score < 70.0 {
            RiskClassification::High
        } else {
            RiskClassification::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskClassification::Low => "LOW",
            RiskClassification::Moderate => "MODERATE",
            RiskClassification::High => "HIGH",
            RiskClassification::Critical => "CRITICAL",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            RiskClassification::Low => "Continue monitoring",
            RiskClassification::Moderate => "Pay attention",
            RiskClassification::High => "Consider action",
            RiskClassification::Critical => "Review urgently",
        }
    }

    pub fn color(self) -> AlertColor {
        match self {
            RiskClassification::Low => AlertColor::Green,
            RiskClassification::Moderate => AlertColor::Yellow,
            RiskClassification::High => AlertColor::Orange,
            RiskClassification::Critical => AlertColor::Red,
        }
    }
}

impl fmt::Display for RiskClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory display color for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertColor {
    Green,
    Yellow,
    Orange,
    Red,
}

/// Bounded risk score with its tier, advice and color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// In `[0, 100]`.
    pub risk_score: f64,
    pub classification: RiskClassification,
    pub recommendation: &'static str,
    pub color: AlertColor,
}

impl RiskAssessment {
    /// Clamp the score and derive everything else from it.
    pub fn from_score(score: f64) -> Self {
        let risk_score = score.clamp(0.0, 100.0);
        let classification = RiskClassification::from_score(risk_score);
        Self {
            risk_score,
            classification,
            recommendation: classification.recommendation(),
            color: classification.color(),
        }
    }
}
