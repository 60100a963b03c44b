//! Session memo cache for market summaries.
//!
//! Keyed by `(symbol, period)`. The cache is an explicit object injected into
//! the fetcher, never process-global state, so tests can share, inspect and
//! clear it. Nothing is persisted; entries live as long as the cache does.
//!
//! Concurrent callers are safe (a single `Mutex` guards the state). Two
//! concurrent misses on the same key both hit the provider and the last
//! insert wins.

use super::period::Period;
use crate::domain::MarketSummary;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// When entries leave the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Keep every entry for the lifetime of the cache.
    #[default]
    Never,
    /// Keep at most `n` entries, dropping the oldest insert first.
    Capacity(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub symbol: String,
    pub period: Period,
}

impl CacheKey {
    pub fn new(symbol: &str, period: &Period) -> Self {
        Self {
            symbol: symbol.to_string(),
            period: period.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, MarketSummary>,
    insertion_order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
}

#[derive(Debug, Default)]
pub struct SummaryCache {
    state: Mutex<CacheState>,
    policy: EvictionPolicy,
}

impl SummaryCache {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            policy,
        }
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    // Poisoned locks are recovered: the state holds plain values only.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Look up a summary, counting the hit or miss.
    pub fn get(&self, key: &CacheKey) -> Option<MarketSummary> {
        let mut state = self.lock();
        match state.entries.get(key).cloned() {
            Some(summary) => {
                state.hits += 1;
                Some(summary)
            }
            None => {
                state.misses += 1;
                None
            }
        }
    }

    /// Store a summary. Re-inserting an existing key replaces the value.
    pub fn insert(&self, key: CacheKey, summary: MarketSummary) {
        let mut state = self.lock();

        if let EvictionPolicy::Capacity(0) = self.policy {
            return;
        }

        if state.entries.insert(key.clone(), summary).is_none() {
            state.insertion_order.push_back(key);
        }

        if let EvictionPolicy::Capacity(max) = self.policy {
            while state.entries.len() > max {
                let Some(oldest) = state.insertion_order.pop_front() else {
                    break;
                };
                state.entries.remove(&oldest);
                tracing::debug!(symbol = %oldest.symbol, period = %oldest.period, "evicted summary");
            }
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.lock().entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.lock().hits
    }

    pub fn misses(&self) -> u64 {
        self.lock().misses
    }

    /// Drop every entry. Hit/miss counters are kept.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.insertion_order.clear();
    }
}
