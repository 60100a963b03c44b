//! PortfolioAggregator — the pipeline folded over a symbol list.
//!
//! A symbol that fails anywhere is left out and recorded in `skipped`; the
//! rest of the list still runs. Only a list with no surviving symbol is an
//! error.

use super::{analyze_symbol, AnalysisError, MarketDataFetcher, RiskScorer};
use crate::data::Period;
use crate::domain::{PortfolioEntry, PortfolioRecommendation, PortfolioResult, SkippedSymbol};
use crate::indicators::round2;

/// Entries scoring above this count as high risk.
pub const HIGH_RISK_SCORE: f64 = 50.0;

pub struct PortfolioAggregator<'a> {
    fetcher: &'a MarketDataFetcher,
    scorer: RiskScorer,
    period: Period,
}

impl<'a> PortfolioAggregator<'a> {
    pub fn new(fetcher: &'a MarketDataFetcher) -> Self {
        Self {
            fetcher,
            scorer: RiskScorer::new(),
            period: Period::default(),
        }
    }

    pub fn with_scorer(mut self, scorer: RiskScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    pub fn analyze<S: AsRef<str>>(&self, symbols: &[S]) -> Result<PortfolioResult, AnalysisError> {
        let mut entries = Vec::with_capacity(symbols.len());
        let mut skipped = Vec::new();

        for raw in symbols {
            let symbol = raw.as_ref().trim();

            match analyze_symbol(self.fetcher, &self.scorer, symbol, &self.period) {
                Ok(analysis) => entries.push(PortfolioEntry {
                    symbol: symbol.to_string(),
                    price: analysis.summary.current_price,
                    volatility: analysis.summary.volatility_percent,
                    risk_score: analysis.risk.risk_score,
                    classification: analysis.risk.classification,
                }),
                Err(err) => {
                    tracing::warn!(%symbol, error = %err, "skipping symbol");
                    skipped.push(SkippedSymbol {
                        symbol: symbol.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        if entries.is_empty() {
            return Err(AnalysisError::NoValidSymbols);
        }

        let total: f64 = entries.iter().map(|e| e.risk_score).sum();
        let mean = total / entries.len() as f64;
        let high_risk_count = entries
            .iter()
            .filter(|e| e.risk_score > HIGH_RISK_SCORE)
            .count();

        // Breakpoints apply to the unrounded mean; only the reported value is rounded.
        Ok(PortfolioResult {
            entries,
            portfolio_risk: round2(mean),
            high_risk_count,
            recommendation: PortfolioRecommendation::from_risk(mean),
            skipped,
        })
    }
}

/// Split comma-separated user input into trimmed, non-empty symbols.
pub fn parse_symbol_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
