//! Handset classification.

use crate::ruleset::RuleSet;

/// Returns `true` when the listing looks like a mobile handset.
///
/// Accessory, wearable and console cues veto first, so "IPHONE 15 CASE" and
/// "GALAXY WATCH 6" are not handsets even though they name a phone maker.
#[must_use]
pub fn is_mobile_device(rules: &RuleSet, name: &str) -> bool {
    if name.trim().is_empty() || rules.non_mobile_cues.is_match(name) {
        return false;
    }
    rules.mobile_cues.is_match(name)
}
