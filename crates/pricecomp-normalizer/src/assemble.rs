//! Output-name assembly and the acceptance filter.

use std::collections::HashSet;

use pricecomp_core::{Brand, Condition, RejectReason, SimType};

use crate::ruleset::RuleSet;

/// Minimum number of visible characters in a publishable name.
const MIN_NAME_CHARS: usize = 3;

/// Builds the canonical name: brand, residual, SIM type, condition, capacity.
///
/// Absent parts are skipped and repeated words keep only their first
/// occurrence.
#[must_use]
pub fn assemble_name(
    brand: Option<Brand>,
    residual: &str,
    sim: Option<SimType>,
    condition: Condition,
    capacity: Option<&str>,
) -> String {
    let parts = [
        brand.map(Brand::as_str),
        Some(residual).filter(|r| !r.trim().is_empty()),
        sim.map(SimType::as_str),
        Some(condition.as_str()),
        capacity,
    ];
    let joined = parts.into_iter().flatten().collect::<Vec<_>>().join(" ");
    dedupe_words(&joined)
}

/// Drops every word already seen earlier in `text`.
#[must_use]
pub fn dedupe_words(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|word| seen.insert(*word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Applies the publication rules, returning the first one the listing
/// breaks.
///
/// `folded_raw` is the accent-folded, upper-cased original title; the seller
/// and condition markers are looked up there rather than in the assembled
/// name because extraction has already erased them.
pub fn check_acceptance(
    rules: &RuleSet,
    normalized_name: &str,
    condition: Condition,
    folded_raw: &str,
) -> Result<(), RejectReason> {
    let visible = normalized_name.chars().filter(|c| !c.is_whitespace()).count();
    if visible < MIN_NAME_CHARS {
        return Err(RejectReason::NameTooShort);
    }
    if !condition.is_publishable() {
        return Err(RejectReason::ConditionNotPublishable);
    }
    if rules
        .banned_sellers
        .iter()
        .any(|marker| folded_raw.contains(marker))
    {
        return Err(RejectReason::BannedSeller);
    }
    if rules.disqualified.is_match(folded_raw) {
        return Err(RejectReason::DisqualifiedCondition);
    }
    Ok(())
}
