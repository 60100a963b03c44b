//! Single-symbol run of the full pipeline.

use super::{AnalysisError, MarketDataFetcher, RiskScorer, SignalDetector};
use crate::data::Period;
use crate::domain::{MarketSummary, RiskAssessment, SignalReport};
use serde::Serialize;

/// Everything the pipeline knows about one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolAnalysis {
    pub summary: MarketSummary,
    pub signals: SignalReport,
    pub risk: RiskAssessment,
}

/// fetch → detect → score for one symbol.
pub fn analyze_symbol(
    fetcher: &MarketDataFetcher,
    scorer: &RiskScorer,
    symbol: &str,
    period: &Period,
) -> Result<SymbolAnalysis, AnalysisError> {
    let summary = fetcher.fetch(symbol, period)?;
    let signals = SignalDetector::new().detect(&summary);
    let risk = scorer.score(signals.signal_count(), summary.volatility_percent);

    Ok(SymbolAnalysis {
        summary,
        signals,
        risk,
    })
}
