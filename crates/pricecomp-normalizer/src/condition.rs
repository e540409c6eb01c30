//! Condition extraction with priority-based conflict resolution.

use std::collections::BTreeSet;

use pricecomp_core::Condition;

use crate::ruleset::RuleSet;

/// Finds every condition token in `name`, erases it, and resolves the
/// listing's condition.
///
/// Patterns run most to least specific so "COMO NUEVO" is consumed before the
/// bare "NUEVO" pattern can see it. When several labels are found the one
/// with the highest priority wins (`USADO > COMO NUEVO > SEMINUEVO > NUEVO`);
/// when none is found the listing is `NUEVO`.
#[must_use]
pub fn extract_condition(rules: &RuleSet, name: &str) -> (Condition, String) {
    let mut found = BTreeSet::new();
    let mut working = name.to_string();

    for (pattern, condition) in &rules.conditions {
        if pattern.is_match(&working) {
            found.insert(*condition);
            working = pattern.replace_all(&working, " ").into_owned();
        }
    }

    // "NUEVO DUAL" leaves a dangling DUAL once NUEVO is gone.
    if found.contains(&Condition::Nuevo) {
        working = erase_lone_dual(rules, &working);
    }

    let condition = found.into_iter().max().unwrap_or(Condition::Nuevo);
    (condition, tidy_separators(&working))
}

/// Removes `DUAL` unless it is part of a `DUAL SIM` marker.
fn erase_lone_dual(rules: &RuleSet, text: &str) -> String {
    rules
        .lone_dual
        .replace_all(text, |caps: &regex::Captures<'_>| {
            if caps.get(1).is_some() {
                caps[0].to_string()
            } else {
                " ".to_string()
            }
        })
        .into_owned()
}

/// Collapses whitespace and the hyphens left stranded by token removal.
///
/// Runs of standalone hyphens become a single ` - ` between words, hyphens
/// at either end of a word or of the string are dropped, and intra-word
/// hyphens (`E-SIM`) are kept.
#[must_use]
pub fn tidy_separators(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut pending_separator = false;

    for token in text.split_whitespace() {
        let word = token.trim_matches('-');
        if word.is_empty() {
            pending_separator = true;
            continue;
        }
        if pending_separator && !out.is_empty() {
            out.push("-");
        }
        pending_separator = false;
        out.push(word);
    }

    out.join(" ")
}

#[cfg(test)]
#[path = "condition_test.rs"]
mod tests;
