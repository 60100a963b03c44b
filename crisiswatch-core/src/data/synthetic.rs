//! Demo provider — deterministic synthetic bars for offline use.
//!
//! Produces a random walk from a starting price of 100.0, seeded from the
//! symbol name so the same symbol always yields the same series. Results
//! built on these bars carry `DataMode::Demo`.

use super::period::Period;
use super::provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How far back any period (including `max`) reaches for synthetic data.
const MAX_SPAN_DAYS: i64 = 5 * 365;

#[derive(Debug, Clone, Default)]
pub struct DemoProvider {
    anchor: Option<NaiveDate>,
}

impl DemoProvider {
    /// Series ending today.
    pub fn new() -> Self {
        Self { anchor: None }
    }

    /// Series ending on a fixed date (reproducible across days).
    pub fn anchored(end: NaiveDate) -> Self {
        Self { anchor: Some(end) }
    }

    fn end_date(&self) -> NaiveDate {
        self.anchor
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl DataProvider for DemoProvider {
    fn name(&self) -> &str {
        "demo"
    }

    fn fetch(&self, symbol: &str, period: &Period) -> Result<FetchResult, DataError> {
        let end = self.end_date();
        let earliest = end - Duration::days(MAX_SPAN_DAYS);
        let start = period
            .window_start(end)
            .map_or(earliest, |start| start.max(earliest));

        let bars = generate_synthetic_bars(symbol, start, end);
        if bars.is_empty() {
            return Err(DataError::EmptySeries {
                symbol: symbol.to_string(),
            });
        }

        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::Synthetic,
        })
    }
}

/// Random walk over weekdays in `[start, end]`.
fn generate_synthetic_bars(symbol: &str, start: NaiveDate, end: NaiveDate) -> Vec<RawBar> {
    // Deterministic seed from symbol name
    let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut bars = Vec::new();
    let mut price = 100.0_f64;
    let mut current = start;

    while current <= end {
        let weekday = current.weekday();
        if weekday == Weekday::Sat || weekday == Weekday::Sun {
            current += Duration::days(1);
            continue;
        }

        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        let open = price;
        let close = price * (1.0 + daily_return);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
        let volume = rng.gen_range(500_000..5_000_000u64);

        bars.push(RawBar {
            date: current,
            open,
            high,
            low,
            close,
            volume,
        });

        price = close;
        current += Duration::days(1);
    }

    bars
}
