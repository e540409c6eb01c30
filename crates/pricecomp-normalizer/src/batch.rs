//! Per-store batch driver.

use pricecomp_core::{Condition, NormalizedListing, RawListing, RejectReason, StoreStats};
use serde::Deserialize;
use serde_json::Value;

use crate::document::parse_documents;
use crate::error::NormalizeError;
use crate::pipeline::{normalize_listing, Outcome};
use crate::ruleset::RuleSet;

/// Everything produced by normalizing one store file.
#[derive(Debug)]
pub struct StoreBatch {
    /// Accepted listings, in input order.
    pub listings: Vec<NormalizedListing>,
    pub stats: StoreStats,
    /// Raw records as recovered from the file, for auditing.
    pub raw_records: Vec<Value>,
    /// Non-fatal problems: malformed documents and invalid records.
    pub errors: Vec<NormalizeError>,
}

/// Normalizes the full contents of one store file.
///
/// Malformed documents and records that are not listing-shaped are logged,
/// counted and skipped; they never stop the rest of the file.
///
/// # Errors
///
/// Returns [`NormalizeError::NoDocuments`] when the file holds no JSON array.
pub fn normalize_store(
    rules: &RuleSet,
    store: &str,
    content: &str,
) -> Result<StoreBatch, NormalizeError> {
    let documents = parse_documents(content)?;

    let mut stats = StoreStats::new(store);
    stats.malformed_documents = documents.errors.len();
    let mut errors = documents.errors;
    for error in &errors {
        tracing::warn!(store, error = %error, "skipping malformed document");
    }

    let mut listings = Vec::new();
    for (index, record) in documents.records.iter().enumerate() {
        let raw = match RawListing::deserialize(record) {
            Ok(raw) => raw,
            Err(source) => {
                let error = NormalizeError::InvalidRecord { index, source };
                tracing::warn!(store, error = %error, "skipping invalid record");
                stats.record_rejected(RejectReason::InvalidRecord);
                errors.push(error);
                continue;
            }
        };

        match normalize_listing(rules, &raw) {
            Outcome::Accepted(listing) => {
                if listing.condition == Condition::Seminuevo {
                    tracing::debug!(
                        store,
                        name = %listing.normalized_name,
                        "seminuevo listing detected"
                    );
                }
                stats.record_accepted(listing.condition);
                listings.push(listing);
            }
            Outcome::Rejected(reason) => {
                tracing::trace!(store, name = %raw.name, ?reason, "listing rejected");
                stats.record_rejected(reason);
            }
        }
    }

    tracing::info!(
        store,
        total = stats.total,
        accepted = stats.accepted,
        rejected = stats.rejected,
        nuevo = stats.condition_count(Condition::Nuevo),
        seminuevo = stats.condition_count(Condition::Seminuevo),
        acceptance_rate = stats.acceptance_rate(),
        "store normalized"
    );

    Ok(StoreBatch {
        listings,
        stats,
        raw_records: documents.records,
        errors,
    })
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
