//! Data providers, lookback periods and the session memo cache

pub mod csv_import;
pub mod memo;
pub mod period;
pub mod provider;
pub mod synthetic;
pub mod yahoo;

pub use csv_import::CsvProvider;
pub use memo::{CacheKey, EvictionPolicy, SummaryCache};
pub use period::Period;
pub use provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};
pub use synthetic::DemoProvider;
pub use yahoo::YahooProvider;
