use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::Condition;

/// Why a listing was left out of the normalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Assembled name shorter than three visible characters.
    NameTooShort,
    /// Condition resolved to something other than NUEVO or SEMINUEVO.
    ConditionNotPublishable,
    /// Raw title carries a banned-seller marker.
    BannedSeller,
    /// Raw title says OPEN BOX or CPO.
    DisqualifiedCondition,
    /// Array element was not a listing-shaped object.
    InvalidRecord,
}

/// Per-store counters consumed by the seminuevo regression check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub store: String,
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub invalid_records: usize,
    pub malformed_documents: usize,
    pub by_condition: BTreeMap<Condition, usize>,
    pub rejected_by_reason: BTreeMap<RejectReason, usize>,
}

impl StoreStats {
    #[must_use]
    pub fn new(store: &str) -> Self {
        Self {
            store: store.to_string(),
            ..Self::default()
        }
    }

    pub fn record_accepted(&mut self, condition: Condition) {
        self.total += 1;
        self.accepted += 1;
        *self.by_condition.entry(condition).or_insert(0) += 1;
    }

    pub fn record_rejected(&mut self, reason: RejectReason) {
        self.total += 1;
        self.rejected += 1;
        if reason == RejectReason::InvalidRecord {
            self.invalid_records += 1;
        }
        *self.rejected_by_reason.entry(reason).or_insert(0) += 1;
    }

    /// Accepted listings with the given condition.
    #[must_use]
    pub fn condition_count(&self, condition: Condition) -> usize {
        self.by_condition.get(&condition).copied().unwrap_or(0)
    }

    /// Share of input records that made it to the output, in `[0.0, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn acceptance_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.total as f64
    }
}

/// A store that could not be processed at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFailure {
    pub store: String,
    pub error: String,
}

/// Report written next to the normalized files after each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub stores: Vec<StoreStats>,
    pub failed_stores: Vec<StoreFailure>,
}

impl RunSummary {
    /// Builds a summary stamped with the current time. Stores are sorted by
    /// name so the file is stable across runs.
    #[must_use]
    pub fn new(mut stores: Vec<StoreStats>, mut failed_stores: Vec<StoreFailure>) -> Self {
        stores.sort_by(|a, b| a.store.cmp(&b.store));
        failed_stores.sort_by(|a, b| a.store.cmp(&b.store));
        Self {
            generated_at: Utc::now(),
            stores,
            failed_stores,
        }
    }

    #[must_use]
    pub fn total_accepted(&self) -> usize {
        self.stores.iter().map(|s| s.accepted).sum()
    }

    /// True when at least one store was attempted and none succeeded.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.stores.is_empty() && !self.failed_stores.is_empty()
    }
}
