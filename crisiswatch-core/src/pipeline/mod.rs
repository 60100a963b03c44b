//! The analysis pipeline: fetch → detect → score, and the aggregations over it.
//!
//! Every failure below the fetch boundary is folded into `AnalysisError`;
//! nothing in this module panics on bad market data.

pub mod dashboard;
pub mod detector;
pub mod fetcher;
pub mod portfolio;
pub mod scorer;
pub mod symbol;

pub use dashboard::{build_dashboard, DashboardTile, FEATURED_SYMBOLS};
pub use detector::SignalDetector;
pub use fetcher::{summarize, MarketDataFetcher};
pub use portfolio::{parse_symbol_list, PortfolioAggregator};
pub use scorer::RiskScorer;
pub use symbol::{analyze_symbol, SymbolAnalysis};

use crate::data::DataError;
use serde::Serialize;
use thiserror::Error;

/// Pipeline-level error.
///
/// The display text is the message shown to users; callers that only need a
/// message can use `to_string()` and ignore the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    DataUnavailable(String),

    #[error("computation error: {0}")]
    Computation(String),

    #[error("No valid symbols in portfolio")]
    NoValidSymbols,
}

impl From<DataError> for AnalysisError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::SymbolNotFound { symbol } | DataError::EmptySeries { symbol } => {
                AnalysisError::DataUnavailable(format!("No data found for symbol: {symbol}"))
            }
            DataError::InvalidPeriod(_) => AnalysisError::InvalidInput(err.to_string()),
            other => AnalysisError::DataUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_symbol_reads_like_no_data() {
        let err: AnalysisError = DataError::SymbolNotFound {
            symbol: "XYZ".into(),
        }
        .into();
        assert_eq!(err.to_string(), "No data found for symbol: XYZ");
    }

    #[test]
    fn provider_errors_keep_their_message() {
        let err: AnalysisError = DataError::NetworkUnreachable("dns failure".into()).into();
        assert_eq!(
            err,
            AnalysisError::DataUnavailable("network unreachable: dns failure".into())
        );
    }

    #[test]
    fn bad_period_is_invalid_input() {
        let err: AnalysisError = DataError::InvalidPeriod("5q".into()).into();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&AnalysisError::Computation("x".into())).unwrap();
        assert_eq!(json, r#"{"kind":"computation","message":"x"}"#);
    }
}
