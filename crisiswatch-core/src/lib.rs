//! CrisisWatch Core — market data, crisis signals, risk scoring, portfolio aggregation.
//!
//! The crate is a single linear pipeline:
//! - `data` fetches a daily price series from a provider (Yahoo Finance, CSV, demo)
//! - `pipeline::fetcher` reduces the series to a `MarketSummary` (memoized per session)
//! - `pipeline::detector` evaluates the crisis-signal predicates
//! - `pipeline::scorer` maps the signal count to a bounded risk score and tier
//! - `pipeline::portfolio` folds the above over a symbol list

pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod pipeline;

pub use config::{ConfigError, CrisisConfig};
pub use data::{DataError, DataProvider, EvictionPolicy, Period, SummaryCache};
pub use domain::{
    AlertColor, CrisisSignal, DataMode, MarketSummary, PortfolioEntry, PortfolioRecommendation,
    PortfolioResult, RiskAssessment, RiskClassification, SignalReport, SkippedSymbol,
};
pub use pipeline::{
    analyze_symbol, build_dashboard, AnalysisError, DashboardTile, MarketDataFetcher,
    PortfolioAggregator, RiskScorer, SignalDetector, SymbolAnalysis,
};
