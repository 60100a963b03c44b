//! Domain records produced by the pipeline

pub mod portfolio;
pub mod risk;
pub mod signal;
pub mod summary;

pub use portfolio::{PortfolioEntry, PortfolioRecommendation, PortfolioResult, SkippedSymbol};
pub use risk::{AlertColor, RiskAssessment, RiskClassification};
pub use signal::{CrisisSignal, SignalReport};
pub use summary::{DataMode, MarketSummary};
