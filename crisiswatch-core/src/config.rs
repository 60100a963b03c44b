//! TOML configuration for the pipeline.
//!
//! Every key is optional; an empty file is the default configuration:
//!
//! ```toml
//! [data]
//! source = "yahoo"          # yahoo | demo | csv
//! csv_dir = "data"
//! period = "30d"
//!
//! [analysis]
//! volatility_method = "annualized"   # annualized | raw
//! volatility_adjustment = false
//!
//! [cache]
//! capacity = 256            # omit to never evict
//!
//! [dashboard]
//! featured = ["AAPL", "SPY", "BTC-USD"]
//! ```

use crate::data::{
    CsvProvider, DataError, DataProvider, DemoProvider, EvictionPolicy, Period, SummaryCache,
    YahooProvider,
};
use crate::indicators::VolatilityMethod;
use crate::pipeline::{MarketDataFetcher, RiskScorer, FEATURED_SYMBOLS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Which provider backs the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Yahoo,
    Demo,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub source: SourceKind,
    pub csv_dir: PathBuf,
    pub period: Period,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            csv_dir: PathBuf::from("data"),
            period: Period::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub volatility_method: VolatilityMethod,
    pub volatility_adjustment: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub featured: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            featured: FEATURED_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrisisConfig {
    pub data: DataConfig,
    pub analysis: AnalysisConfig,
    pub cache: CacheConfig,
    pub dashboard: DashboardConfig,
}

impl CrisisConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.capacity == Some(0) {
            return Err(ConfigError::Invalid(
                "cache.capacity must be at least 1 (omit it to never evict)".into(),
            ));
        }
        if self.dashboard.featured.is_empty() {
            return Err(ConfigError::Invalid(
                "dashboard.featured must list at least one symbol".into(),
            ));
        }
        if self.dashboard.featured.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "dashboard.featured contains an empty symbol".into(),
            ));
        }
        if self.data.source == SourceKind::Csv && self.data.csv_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "data.csv_dir is required when data.source = \"csv\"".into(),
            ));
        }
        Ok(())
    }

    pub fn eviction_policy(&self) -> EvictionPolicy {
        match self.cache.capacity {
            Some(n) => EvictionPolicy::Capacity(n),
            None => EvictionPolicy::Never,
        }
    }

    pub fn scorer(&self) -> RiskScorer {
        RiskScorer::with_volatility_adjustment(self.analysis.volatility_adjustment)
    }

    pub fn build_provider(&self) -> Result<Box<dyn DataProvider>, ConfigError> {
        let provider: Box<dyn DataProvider> = match self.data.source {
            SourceKind::Yahoo => Box::new(YahooProvider::new()?),
            SourceKind::Demo => Box::new(DemoProvider::new()),
            SourceKind::Csv => Box::new(CsvProvider::new(&self.data.csv_dir)),
        };
        Ok(provider)
    }

    /// Fetcher wired with this config's provider, cache policy and volatility method.
    pub fn build_fetcher(&self) -> Result<MarketDataFetcher, ConfigError> {
        let cache = Arc::new(SummaryCache::new(self.eviction_policy()));
        Ok(MarketDataFetcher::from_boxed(self.build_provider()?)
            .with_cache(cache)
            .with_volatility_method(self.analysis.volatility_method))
    }
}
