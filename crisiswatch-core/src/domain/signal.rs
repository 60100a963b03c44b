//! Crisis signals and the per-summary signal report.

use serde::Serialize;
use std::fmt;

/// A named crisis indicator.
///
/// Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CrisisSignal {
    #[serde(rename = "High Volatility")]
    HighVolatility,
    #[serde(rename = "Sharp Decline")]
    SharpDecline,
    #[serde(rename = "Negative Momentum")]
    NegativeMomentum,
}

impl CrisisSignal {
    pub const ALL: [CrisisSignal; 3] = [
        CrisisSignal::HighVolatility,
        CrisisSignal::SharpDecline,
        CrisisSignal::NegativeMomentum,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CrisisSignal::HighVolatility => "High Volatility",
            CrisisSignal::SharpDecline => "Sharp Decline",
            CrisisSignal::NegativeMomentum => "Negative Momentum",
        }
    }

    /// Label with the triggering condition, for alert text.
    pub fn description(self) -> &'static str {
        match self {
            CrisisSignal::HighVolatility => "High Volatility (>20%)",
            CrisisSignal::SharpDecline => "Sharp Decline (>5%)",
            CrisisSignal::NegativeMomentum => "Negative Momentum (<-2%)",
        }
    }
}

impl fmt::Display for CrisisSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signals that fired for one summary, in evaluation order.
///
/// `signal_count` always equals `signals.len()`; the fields are private so the
/// pair cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SignalReport {
    signals: Vec<CrisisSignal>,
    signal_count: usize,
}

impl SignalReport {
    /// Build a report from signals in evaluation order. Repeats are dropped.
    pub fn new(signals: impl IntoIterator<Item = CrisisSignal>) -> Self {
        let mut unique: Vec<CrisisSignal> = Vec::new();
        for signal in signals {
            if !unique.contains(&signal) {
                unique.push(signal);
            }
        }
        let signal_count = unique.len();
        Self {
            signals: unique,
            signal_count,
        }
    }

    pub fn signals(&self) -> &[CrisisSignal] {
        &self.signals
    }

    pub fn signal_count(&self) -> usize {
        self.signal_count
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn contains(&self, signal: CrisisSignal) -> bool {
        self.signals.contains(&signal)
    }
}
