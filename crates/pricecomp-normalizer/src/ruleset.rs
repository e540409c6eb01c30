//! Compiled, read-only form of the tables in [`crate::rules`].
//!
//! A [`RuleSet`] is built once and shared by reference with every stage. It
//! holds no interior mutability, so it can be used from any number of
//! threads at once.

use std::collections::HashMap;

use pricecomp_core::{Brand, Condition, SimType};
use regex::Regex;

use crate::rules::{
    BANNED_SELLER_MARKERS, BRAND_ALIASES, BRAND_PATTERNS, CONDITION_PATTERNS,
    DISQUALIFIED_CONDITION_MARKERS, EX_DISPLAY_PATTERNS, IMPLICIT_BRANDS, MOBILE_CUES,
    NETWORK_TOKENS, NOISE_WORDS, NON_MOBILE_CUES, PRODUCT_LINE_NAMES, RAM_GB, RELATED_SUB_BRANDS,
    SEMINUEVO_EVIDENCE, SIM_LEFTOVERS, SIM_PATTERNS, STORAGE_GB, STORAGE_TB,
};

/// Immutable rule tables with every pattern compiled.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub(crate) brand_aliases: HashMap<&'static str, Brand>,
    pub(crate) implicit_brands: Vec<(Regex, Brand)>,
    pub(crate) brand_patterns: Vec<(Regex, Brand)>,
    pub(crate) brand_mentions: HashMap<Brand, Regex>,
    pub(crate) ex_display: Vec<Regex>,
    pub(crate) conditions: Vec<(Regex, Condition)>,
    pub(crate) lone_dual: Regex,
    pub(crate) non_mobile_cues: Regex,
    pub(crate) mobile_cues: Regex,
    pub(crate) sims: Vec<(Regex, SimType)>,
    pub(crate) storage: Regex,
    pub(crate) ram: Regex,
    pub(crate) ram_plus: Regex,
    pub(crate) other_brands: Regex,
    pub(crate) airpods: Regex,
    pub(crate) audifonos: Regex,
    pub(crate) sim_leftovers: Regex,
    pub(crate) year_in_parens: Regex,
    pub(crate) plus_six: Regex,
    pub(crate) noise_words: Regex,
    pub(crate) network: Regex,
    pub(crate) separators: Regex,
    pub(crate) banned_sellers: Vec<&'static str>,
    pub(crate) disqualified: Regex,
    pub(crate) seminuevo_evidence: Regex,
}

impl RuleSet {
    /// Compiles the built-in tables.
    ///
    /// # Panics
    ///
    /// Panics if a built-in table entry is not a valid pattern. The tables
    /// are static, so this is covered by the crate's own tests.
    #[must_use]
    pub fn new() -> Self {
        let brand_aliases = BRAND_ALIASES.iter().copied().collect();

        let implicit_brands = IMPLICIT_BRANDS
            .iter()
            .map(|&(word, brand)| (word_regex(&[literal(word)]), brand))
            .collect();

        let brand_patterns = BRAND_PATTERNS
            .iter()
            .flat_map(|&(brand, aliases)| {
                aliases
                    .iter()
                    .map(move |alias| (word_regex(&[literal(alias)]), brand))
            })
            .collect();

        let brand_mentions = Brand::ALL
            .into_iter()
            .map(|brand| (brand, word_regex(&mention_fragments(brand))))
            .collect();

        let ex_display = EX_DISPLAY_PATTERNS
            .iter()
            .map(|p| word_regex(&[(*p).to_string()]))
            .collect();

        let conditions = CONDITION_PATTERNS
            .iter()
            .map(|&(p, condition)| (word_regex(&[p.to_string()]), condition))
            .collect();

        let sims = SIM_PATTERNS
            .iter()
            .map(|&(p, sim)| (word_regex(&[p.to_string()]), sim))
            .collect();

        let storage = compile(&format!(
            r"(?i)\b(?:(?P<gb>{})\s?GB|(?P<tb>{})\s?(?:TB|TERA))\b",
            STORAGE_GB.join("|"),
            STORAGE_TB.join("|"),
        ));

        // RAM+storage is written tight (12+512GB) or spaced on both sides
        // (8 + 256GB). A lone suffix such as the 8+ in IPHONE 8+ 64GB is a
        // model name and must survive.
        let storage_figure = format!(
            r"(?:(?:{})\s?GB|(?:{})\s?(?:TB|TERA))\b",
            STORAGE_GB.join("|"),
            STORAGE_TB.join("|"),
        );
        let ram_plus = compile(&format!(
            r"(?i)\b(?:1[0-6]|[1-9])(?:\s*\+\s*GB\b|\+{storage_figure}|\s+\+\s+{storage_figure})"
        ));

        Self {
            brand_aliases,
            implicit_brands,
            brand_patterns,
            brand_mentions,
            ex_display,
            conditions,
            lone_dual: compile(r"(?i)\bDUAL\b(\s+SIM\b)?"),
            non_mobile_cues: cue_regex(NON_MOBILE_CUES),
            mobile_cues: cue_regex(MOBILE_CUES),
            sims,
            storage,
            ram: compile(&format!(r"(?i)\b(?:{})\s?GB\b", RAM_GB.join("|"))),
            ram_plus,
            other_brands: compile(r"(?i)\bOTRAS\s*-?\s*MARCAS?\b"),
            airpods: word_regex(&[literal("AIRPODS")]),
            audifonos: word_regex(&[literal("AUDIFONOS")]),
            sim_leftovers: word_regex(&fragments(SIM_LEFTOVERS)),
            year_in_parens: compile(r"\(\s*\d{4}\s*\)"),
            plus_six: compile(r"\+\s*6\b"),
            noise_words: word_regex(&literals(NOISE_WORDS)),
            network: compile(&format!(r"(?i)\b(?:{})\b\+?", NETWORK_TOKENS.join("|"))),
            separators: compile(r"[-|]|\B\+\B"),
            banned_sellers: BANNED_SELLER_MARKERS.to_vec(),
            disqualified: word_regex(&fragments(DISQUALIFIED_CONDITION_MARKERS)),
            seminuevo_evidence: word_regex(&fragments(SEMINUEVO_EVIDENCE)),
        }
    }

    /// Pattern matching `brand` and the sub-brands that do not name a
    /// product line.
    pub(crate) fn brand_mention(&self, brand: Brand) -> Option<&Regex> {
        self.brand_mentions.get(&brand)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid rule pattern")
}

/// Turns a plain table phrase into a regex fragment: words may be separated
/// by any whitespace and a hyphen may carry spaces on either side.
fn literal(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            word.split('-')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s*-\s*")
        })
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn literals(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| literal(p)).collect()
}

/// Table entries that are already regex fragments.
fn fragments(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| (*p).to_string()).collect()
}

/// Case-insensitive whole-word alternation of `fragments`.
fn word_regex(fragments: &[String]) -> Regex {
    compile(&format!(r"(?i)\b(?:{})\b", fragments.join("|")))
}

/// Like [`word_regex`] but tolerates a model number glued to the cue
/// (`BUDS2`, `TAB10`).
fn cue_regex(words: &[&str]) -> Regex {
    compile(&format!(r"(?i)\b(?:{})\d*\b", literals(words).join("|")))
}

fn mention_fragments(brand: Brand) -> Vec<String> {
    let keep: &[&str] = PRODUCT_LINE_NAMES
        .iter()
        .find(|(b, _)| *b == brand)
        .map(|&(_, names)| names)
        .unwrap_or_default();

    let mut fragments = vec![literal(brand.as_str())];
    if let Some(&(_, subs)) = RELATED_SUB_BRANDS.iter().find(|(b, _)| *b == brand) {
        fragments.extend(
            subs.iter()
                .filter(|sub| !keep.contains(*sub))
                .map(|sub| literal(sub)),
        );
    }
    fragments
}
