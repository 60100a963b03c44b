//! Lookback period — the `range` argument passed through to the provider.
//!
//! Accepted forms follow Yahoo's chart API: `<n>d`, `<n>wk`, `<n>mo`, `<n>y`,
//! `ytd` and `max`. The canonical string is forwarded verbatim; offline
//! providers use `window_start` to cut their series to the same span.

use super::provider::DataError;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Span {
    Days(u32),
    Weeks(u32),
    Months(u32),
    Years(u32),
    YearToDate,
    Max,
}

/// A validated lookback window such as `30d` or `1y`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    raw: String,
    span: Span,
}

impl Period {
    /// Default window used by every command unless overridden.
    pub const DEFAULT: &'static str = "30d";

    /// Windows offered by the presentation layer.
    pub const PRESETS: [&'static str; 3] = ["30d", "90d", "1y"];

    pub fn parse(input: &str) -> Result<Self, DataError> {
        let raw = input.trim().to_ascii_lowercase();
        let span = match raw.as_str() {
            "ytd" => Span::YearToDate,
            "max" => Span::Max,
            _ => {
                let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
                let unit = &raw[digits.len()..];
                let n: u32 = digits
                    .parse()
                    .map_err(|_| DataError::InvalidPeriod(input.to_string()))?;
                if n == 0 {
                    return Err(DataError::InvalidPeriod(input.to_string()));
                }
                match unit {
                    "d" => Span::Days(n),
                    "wk" => Span::Weeks(n),
                    "mo" => Span::Months(n),
                    "y" => Span::Years(n),
                    _ => return Err(DataError::InvalidPeriod(input.to_string())),
                }
            }
        };
        Ok(Self { raw, span })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// First calendar date inside the window ending at `end`.
    ///
    /// `None` means unbounded: `max`, or a span reaching past the earliest
    /// representable date.
    pub fn window_start(&self, end: NaiveDate) -> Option<NaiveDate> {
        match self.span {
            Span::Days(n) => end.checked_sub_days(Days::new(u64::from(n))),
            Span::Weeks(n) => end.checked_sub_days(Days::new(7 * u64::from(n))),
            Span::Months(n) => end.checked_sub_months(Months::new(n)),
            Span::Years(n) => end.checked_sub_months(Months::new(n.saturating_mul(12))),
            Span::YearToDate => NaiveDate::from_ymd_opt(end.year(), 1, 1),
            Span::Max => None,
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Self {
            raw: Self::DEFAULT.to_string(),
            span: Span::Days(30),
        }
    }
}

impl FromStr for Period {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = DataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Period> for String {
    fn from(p: Period) -> Self {
        p.raw
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
