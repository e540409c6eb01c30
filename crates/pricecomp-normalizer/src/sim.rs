//! SIM-type extraction for handsets.

use pricecomp_core::SimType;

use crate::prepare::collapse_whitespace;
use crate::ruleset::RuleSet;

/// Extracts the SIM type of a handset and removes every SIM marker from
/// `name`.
///
/// The first marker in table order decides the type; the others are still
/// stripped so only the canonical label ends up in the final name.
/// Non-handsets pass through unchanged with no SIM type, whatever SIM-like
/// words they contain. A handset without any marker is assumed to take a
/// physical SIM.
#[must_use]
pub fn extract_sim_type(rules: &RuleSet, name: &str, is_mobile: bool) -> (Option<SimType>, String) {
    if !is_mobile {
        return (None, name.to_string());
    }

    let Some(sim) = rules
        .sims
        .iter()
        .find(|(pattern, _)| pattern.is_match(name))
        .map(|(_, sim)| *sim)
    else {
        return (Some(SimType::Physical), name.to_string());
    };

    let stripped = rules
        .sims
        .iter()
        .fold(name.to_string(), |acc, (pattern, _)| {
            pattern.replace_all(&acc, " ").into_owned()
        });
    (Some(sim), collapse_whitespace(&stripped))
}
