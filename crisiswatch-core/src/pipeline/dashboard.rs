//! Dashboard — a quick look at a handful of featured symbols.
//!
//! Unlike the portfolio, failures stay visible: every requested symbol gets a
//! tile, carrying either its analysis or the error that stopped it.

use super::{analyze_symbol, AnalysisError, MarketDataFetcher, RiskScorer, SymbolAnalysis};
use crate::data::Period;
use serde::Serialize;

pub const FEATURED_SYMBOLS: [&str; 3] = ["AAPL", "SPY", "BTC-USD"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardTile {
    pub symbol: String,
    pub outcome: Result<SymbolAnalysis, AnalysisError>,
}

impl DashboardTile {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub fn build_dashboard<S: AsRef<str>>(
    fetcher: &MarketDataFetcher,
    scorer: &RiskScorer,
    period: &Period,
    symbols: &[S],
) -> Vec<DashboardTile> {
    symbols
        .iter()
        .map(|s| {
            let symbol = s.as_ref().trim().to_string();
            let outcome = analyze_symbol(fetcher, scorer, &symbol, period);
            if let Err(e) = &outcome {
                tracing::warn!(%symbol, error = %e, "dashboard tile unavailable");
            }
            DashboardTile { symbol, outcome }
        })
        .collect()
}
