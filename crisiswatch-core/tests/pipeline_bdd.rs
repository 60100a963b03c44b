//! BDD tests for the analysis pipeline.
//!
//! These tests drive fetch → detect → score → aggregate through an in-memory
//! provider with canned close series, so every number is known up front.

use chrono::NaiveDate;
use crisiswatch_core::data::{
    DataError, DataProvider, DataSource, DemoProvider, FetchResult, Period, RawBar,
};
use crisiswatch_core::{
    analyze_symbol, build_dashboard, AnalysisError, CrisisSignal, MarketDataFetcher,
    PortfolioAggregator, PortfolioRecommendation, RiskClassification, RiskScorer, SignalDetector,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Serves fixed close series; unknown symbols are "not found".
struct FixtureProvider {
    series: HashMap<String, Vec<f64>>,
    calls: Arc<AtomicUsize>,
}

impl FixtureProvider {
    fn new(series: &[(&str, &[f64])]) -> Self {
        Self {
            series: series
                .iter()
                .map(|(s, closes)| (s.to_string(), closes.to_vec()))
                .collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl DataProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch(&self, symbol: &str, _period: &Period) -> Result<FetchResult, DataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let closes = self
            .series
            .get(symbol)
            .ok_or_else(|| DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;
        let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| RawBar {
                date: base + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 10_000,
            })
            .collect();
        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::YahooFinance,
        })
    }
}

// AAPL: -6% over the window with large swings (annualized vol far above 20%).
const AAPL: &[f64] = &[100.0, 110.0, 90.0, 94.0];
// SPY: +1% with tiny daily moves.
const SPY: &[f64] = &[100.0, 100.5, 101.0];
// ZERO: first close of zero, percentage change undefined.
const ZERO: &[f64] = &[0.0, 1.0, 2.0];

fn fixture_fetcher() -> (MarketDataFetcher, Arc<AtomicUsize>) {
    let provider = FixtureProvider::new(&[("AAPL", AAPL), ("SPY", SPY), ("ZERO", ZERO)]);
    let calls = Arc::clone(&provider.calls);
    (MarketDataFetcher::new(provider), calls)
}

#[test]
fn bdd_scenario_single_symbol_in_crisis() {
    // GIVEN a symbol that fell 6% with high volatility
    let (fetcher, _) = fixture_fetcher();

    // WHEN the full pipeline runs
    let analysis =
        analyze_symbol(&fetcher, &RiskScorer::new(), "AAPL", &Period::default()).unwrap();

    // THEN all three signals fire in evaluation order
    assert_eq!(analysis.summary.current_price, 94.0);
    assert_eq!(analysis.summary.price_change_percent, -6.0);
    assert!(analysis.summary.volatility_percent > 20.0);
    assert_eq!(analysis.signals.signals(), &CrisisSignal::ALL);

    // AND the base scorer lands in CRITICAL
    assert_eq!(analysis.risk.risk_score, 75.0);
    assert_eq!(analysis.risk.classification, RiskClassification::Critical);
    assert_eq!(analysis.risk.recommendation, "Review urgently");
}

#[test]
fn bdd_scenario_portfolio_with_one_failing_symbol() {
    // GIVEN AAPL (crisis), SPY (calm) and MSFT (provider has no data)
    let (fetcher, _) = fixture_fetcher();
    let aggregator = PortfolioAggregator::new(&fetcher);

    // WHEN the portfolio is analyzed
    let result = aggregator.analyze(&["AAPL", "SPY", "MSFT"]).unwrap();

    // THEN MSFT is excluded and the order of the rest is preserved
    let symbols: Vec<&str> = result.entries.iter().map(|e| e.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AAPL", "SPY"]);

    assert_eq!(result.entries[0].risk_score, 75.0);
    assert_eq!(result.entries[0].classification, RiskClassification::Critical);
    assert_eq!(result.entries[1].risk_score, 0.0);
    assert_eq!(result.entries[1].classification, RiskClassification::Low);

    // AND the aggregate is the mean of the included scores
    assert_eq!(result.portfolio_risk, 37.5);
    assert_eq!(result.high_risk_count, 1);
    assert_eq!(result.recommendation, PortfolioRecommendation::Review);

    // AND the dropped symbol shows up in the diagnostic list
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].symbol, "MSFT");
    assert_eq!(result.skipped[0].reason, "No data found for symbol: MSFT");
}

#[test]
fn bdd_scenario_portfolio_symbols_are_trimmed() {
    // GIVEN symbols with surrounding whitespace
    let (fetcher, _) = fixture_fetcher();

    // WHEN the portfolio is analyzed
    let result = PortfolioAggregator::new(&fetcher)
        .analyze(&[" SPY ", "\tAAPL"])
        .unwrap();

    // THEN entries carry the trimmed symbols
    assert_eq!(result.entries[0].symbol, "SPY");
    assert_eq!(result.entries[1].symbol, "AAPL");
}

#[test]
fn bdd_scenario_all_symbols_fail() {
    // GIVEN only symbols the provider cannot serve (or cannot compute)
    let (fetcher, _) = fixture_fetcher();

    // WHEN the portfolio is analyzed
    let result = PortfolioAggregator::new(&fetcher).analyze(&["MSFT", "ZERO", ""]);

    // THEN the result is an error, never an empty portfolio
    assert_eq!(result, Err(AnalysisError::NoValidSymbols));
    assert_eq!(
        AnalysisError::NoValidSymbols.to_string(),
        "No valid symbols in portfolio"
    );
}

#[test]
fn bdd_scenario_empty_symbol_list() {
    let (fetcher, calls) = fixture_fetcher();
    let empty: [&str; 0] = [];
    assert_eq!(
        PortfolioAggregator::new(&fetcher).analyze(&empty),
        Err(AnalysisError::NoValidSymbols)
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn bdd_scenario_zero_baseline_surfaces_raw_message() {
    // GIVEN a series whose first close is zero
    let (fetcher, _) = fixture_fetcher();

    // WHEN fetched directly
    let err = fetcher.fetch_default("ZERO").unwrap_err();

    // THEN the computation error is returned, not panicked
    assert!(matches!(err, AnalysisError::Computation(_)));
    assert!(err.to_string().contains("ZERO"));
}

#[test]
fn bdd_scenario_repeated_fetch_is_idempotent() {
    // GIVEN a fetcher with the default never-evict cache
    let (fetcher, calls) = fixture_fetcher();

    // WHEN the same (symbol, period) is requested twice
    let first = fetcher.fetch("SPY", &Period::default()).unwrap();
    let second = fetcher.fetch("SPY", &Period::default()).unwrap();

    // THEN both summaries are identical and the provider was called once
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn bdd_scenario_portfolio_reuses_cached_summaries() {
    // GIVEN a symbol already analyzed in this session
    let (fetcher, calls) = fixture_fetcher();
    fetcher.fetch_default("AAPL").unwrap();

    // WHEN it appears again in a portfolio
    PortfolioAggregator::new(&fetcher)
        .analyze(&["AAPL", "SPY"])
        .unwrap();

    // THEN only SPY needed a new provider call
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn bdd_scenario_volatility_adjustment_variant() {
    // GIVEN the scorer variant that adds a volatility term
    let (fetcher, _) = fixture_fetcher();
    let scorer = RiskScorer::with_volatility_adjustment(true);

    // WHEN the calm symbol is scored
    let analysis = analyze_symbol(&fetcher, &scorer, "SPY", &Period::default()).unwrap();

    // THEN its score is a tenth of its (small) volatility, still LOW
    let expected = analysis.summary.volatility_percent / 100.0 * 10.0;
    assert!((analysis.risk.risk_score - expected).abs() < 1e-9);
    assert_eq!(analysis.risk.classification, RiskClassification::Low);
}

#[test]
fn bdd_scenario_dashboard_keeps_failed_tiles() {
    // GIVEN the featured symbols, one of which the provider lacks
    let (fetcher, _) = fixture_fetcher();

    // WHEN the dashboard is built
    let tiles = build_dashboard(
        &fetcher,
        &RiskScorer::new(),
        &Period::default(),
        &["AAPL", "SPY", "BTC-USD"],
    );

    // THEN every symbol has a tile, in order, and only BTC-USD failed
    assert_eq!(tiles.len(), 3);
    assert!(tiles[0].is_ok());
    assert!(tiles[1].is_ok());
    assert!(!tiles[2].is_ok());
    assert_eq!(tiles[2].symbol, "BTC-USD");
}

#[test]
fn bdd_scenario_detector_passes_errors_through() {
    let (fetcher, _) = fixture_fetcher();
    let summary = fetcher.fetch_default("MSFT");
    let report = SignalDetector::new().detect_result(&summary);
    assert_eq!(report.unwrap_err(), summary.unwrap_err());
}

#[test]
fn bdd_scenario_oversized_period_is_served_not_panicked() {
    // GIVEN the demo provider and a period far beyond the calendar
    let anchor = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
    let fetcher = MarketDataFetcher::new(DemoProvider::anchored(anchor));
    let huge = Period::parse("100000000d").unwrap();

    // WHEN fetched
    let summary = fetcher.fetch("AAPL", &huge).unwrap();

    // THEN the series is capped like `max`
    let max = fetcher.fetch("AAPL", &Period::parse("max").unwrap()).unwrap();
    assert_eq!(summary, max);
    assert!(summary.is_demo());
}
