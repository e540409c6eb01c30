//! Storage capacity extraction. RAM figures are recognised only so they can
//! be dropped.

use crate::prepare::collapse_whitespace;
use crate::rules::CAPACITY_UNITS;
use crate::ruleset::RuleSet;

/// Extracts the canonical storage capacity and strips every storage and RAM
/// token from `name`.
///
/// When several storage sizes appear the last one wins. `1024GB` and
/// `2048GB` are reported as `1TB` and `2TB`.
#[must_use]
pub fn extract_capacity(rules: &RuleSet, name: &str) -> (Option<String>, String) {
    let capacity = rules
        .storage
        .captures_iter(name)
        .last()
        .and_then(|caps| {
            if let Some(gb) = caps.name("gb") {
                Some(canonical_gb(gb.as_str()))
            } else {
                caps.name("tb").map(|tb| format!("{}TB", tb.as_str()))
            }
        });

    // RAM+storage pairs go first: they need the storage figure to match.
    let stripped = rules.ram_plus.replace_all(name, " ");
    let stripped = rules.storage.replace_all(&stripped, " ");
    let stripped = rules.ram.replace_all(&stripped, " ");

    (capacity, collapse_whitespace(&stripped))
}

fn canonical_gb(gigabytes: &str) -> String {
    let raw = format!("{gigabytes}GB");
    match CAPACITY_UNITS.iter().find(|(from, _)| *from == raw) {
        Some((_, to)) => (*to).to_string(),
        None => raw,
    }
}
