//! Residual-name cleanup: whatever the extractors left behind, minus noise
//! and the words the assembler re-adds itself.

use pricecomp_core::Brand;

use crate::prepare::collapse_whitespace;
use crate::ruleset::RuleSet;

/// Cleans the residual name once condition, SIM and capacity are gone.
///
/// Removes catch-all store categories, leftover SIM shorthand, years in
/// parentheses and the noise vocabulary; network tokens survive only on
/// handsets. The detected brand and its sub-brands are removed because the
/// assembler prefixes the brand, except for product-line names such as
/// IPHONE that identify the model.
#[must_use]
pub fn clean_residual(rules: &RuleSet, name: &str, brand: Option<Brand>, is_mobile: bool) -> String {
    let mut text = rules.other_brands.replace_all(name, " ").into_owned();

    if rules.airpods.is_match(&text) {
        text = rules.audifonos.replace_all(&text, " ").into_owned();
    }
    text = rules.sim_leftovers.replace_all(&text, " ").into_owned();
    text = rules.year_in_parens.replace_all(&text, " ").into_owned();
    if is_mobile {
        text = rules.plus_six.replace_all(&text, " ").into_owned();
    }
    text = rules.noise_words.replace_all(&text, " ").into_owned();

    if !is_mobile {
        text = rules.network.replace_all(&text, " ").into_owned();
    }

    if let Some(mention) = brand.and_then(|b| rules.brand_mention(b)) {
        text = mention.replace_all(&text, " ").into_owned();
    }

    let text = rules.separators.replace_all(&text, " ");
    collapse_whitespace(&text)
}

#[cfg(test)]
#[path = "residual_test.rs"]
mod tests;
