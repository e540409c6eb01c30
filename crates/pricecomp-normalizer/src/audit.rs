//! Seminuevo regression audit.
//!
//! Compares how many raw titles carry ex-display or seminuevo wording with
//! how many normalized listings came out as SEMINUEVO. A positive difference
//! means listings were lost or mislabelled along the way.

use pricecomp_core::{Condition, NormalizedListing};
use serde::Serialize;
use serde_json::Value;

use crate::prepare::fold_text;
use crate::ruleset::RuleSet;

/// Number of suspect raw titles kept for display.
const MAX_SAMPLES: usize = 5;

/// Audit counts for one store, or the sum over several.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeminuevoAudit {
    pub store: String,
    pub raw_total: usize,
    pub normalized_total: usize,
    /// Raw titles matching a seminuevo pattern.
    pub seminuevo_patterns: usize,
    /// Normalized listings whose condition is SEMINUEVO.
    pub seminuevo_normalized: usize,
    /// First few raw titles that matched a seminuevo pattern.
    pub samples: Vec<String>,
}

impl SeminuevoAudit {
    /// `seminuevo_patterns - seminuevo_normalized`. Negative when
    /// normalization found more seminuevo listings than the raw patterns.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn difference(&self) -> i64 {
        self.seminuevo_patterns as i64 - self.seminuevo_normalized as i64
    }

    /// Listings that look lost, or zero.
    #[must_use]
    pub fn lost(&self) -> usize {
        self.seminuevo_patterns
            .saturating_sub(self.seminuevo_normalized)
    }

    /// Adds another store's counts into this one. Samples are not merged.
    pub fn absorb(&mut self, other: &SeminuevoAudit) {
        self.raw_total += other.raw_total;
        self.normalized_total += other.normalized_total;
        self.seminuevo_patterns += other.seminuevo_patterns;
        self.seminuevo_normalized += other.seminuevo_normalized;
    }
}

/// Whether a raw title carries seminuevo wording (EXH, DE EXH, EXH PREMIUM,
/// DE EXH PREMIUM, SEMINUEVO, SEMI NUEVO), ignoring case and accents.
#[must_use]
pub fn has_seminuevo_pattern(rules: &RuleSet, title: &str) -> bool {
    !title.is_empty() && rules.seminuevo_evidence.is_match(&fold_text(title))
}

/// Audits one store's raw records against its normalized output.
#[must_use]
pub fn audit_store(
    rules: &RuleSet,
    store: &str,
    raw_records: &[Value],
    listings: &[NormalizedListing],
) -> SeminuevoAudit {
    let suspects: Vec<&str> = raw_records
        .iter()
        .filter_map(|record| record.get("name").and_then(Value::as_str))
        .filter(|name| has_seminuevo_pattern(rules, name))
        .collect();

    let seminuevo_normalized = listings
        .iter()
        .filter(|listing| listing.condition == Condition::Seminuevo)
        .count();

    SeminuevoAudit {
        store: store.to_string(),
        raw_total: raw_records.len(),
        normalized_total: listings.len(),
        seminuevo_patterns: suspects.len(),
        seminuevo_normalized,
        samples: suspects
            .iter()
            .take(MAX_SAMPLES)
            .map(|name| (*name).to_string())
            .collect(),
    }
}
