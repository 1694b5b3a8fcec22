//! Aggregator service: fetch, dedupe by killmail id, sum destroyed value

use crate::sources::KillSource;
use crate::types::{IskSummary, Killmail};
use std::collections::HashMap;

/// Deduplication ledger for one aggregation run.
///
/// First-seen value wins: a later record with an id already in the ledger is
/// counted as a duplicate and its value ignored.
#[derive(Debug, Default)]
pub struct KillLedger {
    values: HashMap<u64, f64>,
    // Accumulated in insertion order so repeated runs sum identically
    total: f64,
    duplicates: usize,
    skipped: usize,
}

impl KillLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one killmail. Returns true if it was counted.
    pub fn record(&mut self, km: &Killmail) -> bool {
        let Some(id) = km.id() else {
            self.skipped += 1;
            return false;
        };

        if self.values.contains_key(&id) {
            self.duplicates += 1;
            return false;
        }

        let value = km.destroyed_value();
        self.values.insert(id, value);
        self.total += value;
        true
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn into_summary(self, character_ids: Vec<u64>) -> IskSummary {
        IskSummary {
            character_ids,
            total_isk: self.total,
            unique_kills: self.values.len(),
            duplicate_kills: self.duplicates,
            skipped_kills: self.skipped,
        }
    }
}

/// Aggregator for ISK totals across characters
pub struct Aggregator;

impl Aggregator {
    /// Total destroyed value over the distinct killmails of all characters.
    /// Characters are fetched one after another, in order.
    pub fn total_isk<S: KillSource + ?Sized>(source: &S, character_ids: &[u64]) -> f64 {
        Self::ledger(source, character_ids).total()
    }

    /// Same pass as [`Aggregator::total_isk`], keeping the counts
    pub fn summarize<S: KillSource + ?Sized>(source: &S, character_ids: &[u64]) -> IskSummary {
        Self::ledger(source, character_ids).into_summary(character_ids.to_vec())
    }

    fn ledger<S: KillSource + ?Sized>(source: &S, character_ids: &[u64]) -> KillLedger {
        let mut ledger = KillLedger::new();
        for &character_id in character_ids {
            let kills = source.fetch_kills(character_id);
            tracing::debug!(
                source = source.name(),
                character_id,
                count = kills.len(),
                "merging killmails"
            );
            for km in &kills {
                ledger.record(km);
            }
        }
        ledger
    }
}
