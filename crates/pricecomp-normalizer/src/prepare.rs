//! Text preparation: accent folding, upper-casing and the early collapse of
//! ex-display jargon.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::rules::EX_DISPLAY_CANONICAL;
use crate::ruleset::RuleSet;

/// Decomposes to NFD and drops combining marks: `"Físico"` → `"Fisico"`.
#[must_use]
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Accent-free, upper-case form used for every comparison against the rule
/// tables.
#[must_use]
pub fn fold_text(text: &str) -> String {
    strip_accents(text).to_uppercase()
}

/// Joins whitespace-separated words with single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prepares a raw title for the extractor chain.
///
/// Every ex-display variant ("DE EXH PREMIUM", "DE EXH", "EXH PREMIUM",
/// "EXH") is rewritten to `SEMINUEVO` here, before noise removal could
/// discard "EXH" or brand detection could trip over it.
#[must_use]
pub fn prepare_name(rules: &RuleSet, raw: &str) -> String {
    let folded = fold_text(raw);
    let collapsed = rules.ex_display.iter().fold(folded, |text, pattern| {
        pattern
            .replace_all(&text, EX_DISPLAY_CANONICAL)
            .into_owned()
    });
    collapse_whitespace(&collapsed)
}
