//! Criterion benchmarks for CrisisWatch hot paths.
//!
//! Benchmarks:
//! 1. Series reduction (summarize a year of daily bars)
//! 2. Signal detection and scoring
//! 3. Portfolio aggregation over a cached fetcher

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crisiswatch_core::data::{DataSource, DemoProvider, FetchResult, Period, RawBar};
use crisiswatch_core::indicators::VolatilityMethod;
use crisiswatch_core::pipeline::summarize;
use crisiswatch_core::{
    DataMode, MarketDataFetcher, MarketSummary, PortfolioAggregator, RiskScorer, SignalDetector,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_fetch_result(n: usize) -> FetchResult {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let bars = (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            RawBar {
                date: base_date + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000 + (i as u64 % 500_000),
            }
        })
        .collect();
    FetchResult {
        symbol: "BENCH".to_string(),
        bars,
        source: DataSource::YahooFinance,
    }
}

// ── 1. Summarize ─────────────────────────────────────────────────────

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let fetched = make_fetch_result(252);

    group.bench_function("annualized_252_bars", |b| {
        b.iter(|| summarize("BENCH", black_box(&fetched), VolatilityMethod::Annualized))
    });
    group.bench_function("raw_252_bars", |b| {
        b.iter(|| summarize("BENCH", black_box(&fetched), VolatilityMethod::Raw))
    });

    group.finish();
}

// ── 2. Detect + score ────────────────────────────────────────────────

fn bench_detect_and_score(c: &mut Criterion) {
    let summary = MarketSummary {
        symbol: "BENCH".into(),
        current_price: 94.0,
        price_change_percent: -6.0,
        volatility_percent: 25.0,
        volume: 1_000_000,
        mode: DataMode::Real,
    };
    let detector = SignalDetector::new();
    let scorer = RiskScorer::with_volatility_adjustment(true);

    c.bench_function("detect_and_score", |b| {
        b.iter(|| {
            let report = detector.detect(black_box(&summary));
            scorer.score(report.signal_count(), summary.volatility_percent)
        })
    });
}

// ── 3. Portfolio ─────────────────────────────────────────────────────

fn bench_portfolio(c: &mut Criterion) {
    let anchor = chrono::NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
    let fetcher = MarketDataFetcher::new(DemoProvider::anchored(anchor));
    let symbols: Vec<String> = (0..20).map(|i| format!("SYM{i}")).collect();
    let aggregator = PortfolioAggregator::new(&fetcher).with_period(Period::parse("1y").unwrap());

    // Warm the cache so the benchmark measures aggregation, not generation.
    let _ = aggregator.analyze(&symbols);

    c.bench_function("portfolio_20_symbols_cached", |b| {
        b.iter(|| aggregator.analyze(black_box(&symbols)))
    });
}

criterion_group!(benches, bench_summarize, bench_detect_and_score, bench_portfolio);
criterion_main!(benches);
