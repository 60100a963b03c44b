//! Data provider trait and structured error types.
//!
//! The DataProvider trait abstracts over the live source (Yahoo Finance) and the
//! offline ones (CSV import, demo random walk) so the pipeline can run without
//! network access and tests can inject canned series.

use super::period::Period;
use crate::domain::DataMode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw daily OHLCV bar from a data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Structured error types for data operations.
///
/// These are displayable as-is; the pipeline folds them into `AnalysisError`.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("No data found for symbol: {symbol}")]
    EmptySeries { symbol: String },

    #[error("invalid period '{0}' (expected e.g. 30d, 90d, 6mo, 1y, ytd, max)")]
    InvalidPeriod(String),

    #[error("csv import error: {0}")]
    CsvError(String),

    #[error("data error: {0}")]
    Other(String),
}

/// Result of a successful data fetch for a single symbol.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub symbol: String,
    /// Chronologically ordered, oldest first.
    pub bars: Vec<RawBar>,
    pub source: DataSource,
}

/// Where the data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    YahooFinance,
    CsvImport,
    Synthetic,
}

impl DataSource {
    /// Synthetic series are flagged as demo data all the way to the output.
    pub fn mode(self) -> DataMode {
        match self {
            DataSource::Synthetic => DataMode::Demo,
            DataSource::YahooFinance | DataSource::CsvImport => DataMode::Real,
        }
    }
}

/// Trait for data providers (Yahoo Finance, CSV import, demo).
///
/// Providers know nothing about memoization; the fetcher's `SummaryCache`
/// sits above this trait.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily bars for a symbol over the trailing `period`.
    fn fetch(&self, symbol: &str, period: &Period) -> Result<FetchResult, DataError>;
}
