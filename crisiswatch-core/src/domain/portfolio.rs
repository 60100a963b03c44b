//! Portfolio-level result records.

use super::risk::RiskClassification;
use serde::Serialize;
use std::fmt;

/// One successfully analyzed symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioEntry {
    pub symbol: String,
    pub price: f64,
    pub volatility: f64,
    pub risk_score: f64,
    pub classification: RiskClassification,
}

/// A symbol left out of the portfolio and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSymbol {
    pub symbol: String,
    pub reason: String,
}

/// Portfolio-level advice from the average risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PortfolioRecommendation {
    Monitor,
    Review,
    Rebalance,
}

impl PortfolioRecommendation {
    /// `<30` Monitor, `<50` Review, otherwise Rebalance.
    pub fn from_risk(portfolio_risk: f64) -> Self {
        if portfolio_risk < 30.0 {
            PortfolioRecommendation::Monitor
        } else if portfolio_risk < 50.0 {
            PortfolioRecommendation::Review
        } else {
            PortfolioRecommendation::Rebalance
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PortfolioRecommendation::Monitor => "Monitor",
            PortfolioRecommendation::Review => "Review",
            PortfolioRecommendation::Rebalance => "Rebalance",
        }
    }
}

impl fmt::Display for PortfolioRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregated view over every symbol that made it through the pipeline.
///
/// Never constructed with zero entries; the aggregator returns an error instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioResult {
    /// Input order, successful symbols only.
    pub entries: Vec<PortfolioEntry>,
    /// Mean entry risk score, rounded to 2 dp.
    pub portfolio_risk: f64,
    /// Entries with `risk_score > 50`.
    pub high_risk_count: usize,
    pub recommendation: PortfolioRecommendation,
    /// Diagnostic list of symbols that were dropped.
    pub skipped: Vec<SkippedSymbol>,
}
