//! Brand resolution: store hint, then implicit product nouns, then the
//! ordered brand-pattern table.

use pricecomp_core::Brand;

use crate::prepare::fold_text;
use crate::rules::UNKNOWN_BRAND_SENTINEL;
use crate::ruleset::RuleSet;

/// Resolves at most one canonical brand for a listing.
///
/// A usable store hint always wins. Otherwise the prepared `name` is checked
/// against the implicit-brand lexicon and then the brand-pattern table, in
/// table order, first match wins.
#[must_use]
pub fn extract_brand(rules: &RuleSet, name: &str, hint: Option<&str>) -> Option<Brand> {
    hint.and_then(|h| brand_from_hint(rules, h))
        .or_else(|| detect_brand(rules, name))
}

/// Maps a store-supplied brand through the alias table.
///
/// Empty hints, the `UNKNOWN` sentinel and values outside the canonical
/// vocabulary yield `None`.
#[must_use]
pub fn brand_from_hint(rules: &RuleSet, hint: &str) -> Option<Brand> {
    let key = fold_text(hint.trim());
    if key.is_empty() || key == UNKNOWN_BRAND_SENTINEL {
        return None;
    }
    rules
        .brand_aliases
        .get(key.as_str())
        .copied()
        .or_else(|| Brand::from_canonical(&key))
}

/// Detects a brand from the title alone.
#[must_use]
pub fn detect_brand(rules: &RuleSet, name: &str) -> Option<Brand> {
    rules
        .implicit_brands
        .iter()
        .chain(&rules.brand_patterns)
        .find(|(pattern, _)| pattern.is_match(name))
        .map(|&(_, brand)| brand)
}
