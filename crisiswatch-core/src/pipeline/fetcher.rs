//! MarketDataFetcher — fetch a price series and reduce it to a `MarketSummary`.
//!
//! Reduction over the chronologically ordered closes:
//! - current_price = last close
//! - price_change_percent = (last / first - 1) * 100
//! - volatility_percent = stdev of daily returns, scaled per `VolatilityMethod`
//! - volume = last bar's volume
//!
//! Floats are rounded to 2 dp. Successful summaries are memoized in the
//! injected `SummaryCache` under `(symbol, period)`.

use super::AnalysisError;
use crate::data::{CacheKey, DataProvider, FetchResult, Period, SummaryCache};
use crate::domain::MarketSummary;
use crate::indicators::{pct_change, round2, VolatilityMethod};
use std::sync::Arc;

pub struct MarketDataFetcher {
    provider: Box<dyn DataProvider>,
    cache: Arc<SummaryCache>,
    volatility: VolatilityMethod,
}

impl MarketDataFetcher {
    pub fn new(provider: impl DataProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub fn from_boxed(provider: Box<dyn DataProvider>) -> Self {
        Self {
            provider,
            cache: Arc::new(SummaryCache::default()),
            volatility: VolatilityMethod::default(),
        }
    }

    /// Share a cache with the caller (or other fetchers).
    pub fn with_cache(mut self, cache: Arc<SummaryCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_volatility_method(mut self, method: VolatilityMethod) -> Self {
        self.volatility = method;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn cache(&self) -> &Arc<SummaryCache> {
        &self.cache
    }

    pub fn volatility_method(&self) -> VolatilityMethod {
        self.volatility
    }

    /// Summary for `symbol` over the default 30-day window.
    pub fn fetch_default(&self, symbol: &str) -> Result<MarketSummary, AnalysisError> {
        self.fetch(symbol, &Period::default())
    }

    /// Summary for `symbol` over `period`, served from the cache when possible.
    pub fn fetch(&self, symbol: &str, period: &Period) -> Result<MarketSummary, AnalysisError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "symbol must not be empty".into(),
            ));
        }

        let key = CacheKey::new(symbol, period);
        if let Some(summary) = self.cache.get(&key) {
            tracing::info!(%symbol, %period, "summary served from cache");
            return Ok(summary);
        }

        tracing::debug!(%symbol, %period, provider = self.provider.name(), "fetching series");
        let fetched = self.provider.fetch(symbol, period)?;
        let summary = summarize(symbol, &fetched, self.volatility)?;

        self.cache.insert(key, summary.clone());
        Ok(summary)
    }
}

/// Reduce a fetched series to its summary.
///
/// Bars without a finite close are ignored. An empty series is
/// `DataUnavailable`; a non-positive first close is a `Computation` error.
pub fn summarize(
    symbol: &str,
    fetched: &FetchResult,
    method: VolatilityMethod,
) -> Result<MarketSummary, AnalysisError> {
    let priced: Vec<_> = fetched
        .bars
        .iter()
        .filter(|b| b.close.is_finite())
        .collect();

    let (Some(first), Some(last)) = (priced.first(), priced.last()) else {
        return Err(AnalysisError::DataUnavailable(format!(
            "No data found for symbol: {symbol}"
        )));
    };

    let change = pct_change(first.close, last.close).ok_or_else(|| {
        AnalysisError::Computation(format!(
            "baseline close for {symbol} is {}; percentage change is undefined",
            first.close
        ))
    })?;

    let closes: Vec<f64> = priced.iter().map(|b| b.close).collect();
    let volatility = method.volatility_percent(&closes);

    tracing::debug!(
        %symbol,
        bars = closes.len(),
        change,
        volatility,
        "series summarized"
    );

    Ok(MarketSummary {
        symbol: symbol.to_string(),
        current_price: round2(last.close),
        price_change_percent: round2(change),
        volatility_percent: round2(volatility),
        volume: last.volume,
        mode: fetched.source.mode(),
    })
}
