//! Per-listing rule cascade.

use pricecomp_core::{Brand, Condition, NormalizedListing, RawListing, RejectReason, SimType};

use crate::assemble::{assemble_name, check_acceptance};
use crate::brand::extract_brand;
use crate::capacity::extract_capacity;
use crate::condition::extract_condition;
use crate::device::is_mobile_device;
use crate::prepare::{fold_text, prepare_name};
use crate::residual::clean_residual;
use crate::ruleset::RuleSet;
use crate::sim::extract_sim_type;

/// Attributes pulled out of one title, before acceptance is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub brand: Option<Brand>,
    pub condition: Condition,
    pub is_mobile: bool,
    pub sim_type: Option<SimType>,
    pub storage_capacity: Option<String>,
    /// What is left of the title once every attribute has been removed.
    pub residual: String,
}

impl Extraction {
    /// The canonical name built from these attributes.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        assemble_name(
            self.brand,
            &self.residual,
            self.sim_type,
            self.condition,
            self.storage_capacity.as_deref(),
        )
    }
}

/// Result of normalizing one raw listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(NormalizedListing),
    Rejected(RejectReason),
}

/// Runs the extractor chain over a title.
///
/// 1. Fold accents and case; collapse ex-display jargon to SEMINUEVO.
/// 2. Resolve the brand from `hint`, falling back to the title.
/// 3. Extract and erase the condition.
/// 4. Classify the listing as handset or not.
/// 5. Extract the SIM type (handsets only).
/// 6. Extract the storage capacity and strip RAM figures.
/// 7. Clean the residual name.
///
/// Every stage reads the name the previous one produced; the brand is
/// resolved on the prepared title so condition removal cannot hide it.
#[must_use]
pub fn extract(rules: &RuleSet, title: &str, hint: Option<&str>) -> Extraction {
    let prepared = prepare_name(rules, title);
    let brand = extract_brand(rules, &prepared, hint);
    let (condition, name) = extract_condition(rules, &prepared);
    let is_mobile = is_mobile_device(rules, &name);
    let (sim_type, name) = extract_sim_type(rules, &name, is_mobile);
    let (storage_capacity, name) = extract_capacity(rules, &name);
    let residual = clean_residual(rules, &name, brand, is_mobile);

    Extraction {
        brand,
        condition,
        is_mobile,
        sim_type,
        storage_capacity,
        residual,
    }
}

/// Normalizes one listing and applies the publication rules.
#[must_use]
pub fn normalize_listing(rules: &RuleSet, raw: &RawListing) -> Outcome {
    if raw.name.trim().is_empty() {
        return Outcome::Rejected(RejectReason::NameTooShort);
    }

    let extraction = extract(rules, &raw.name, raw.brand_hint.as_deref());
    let normalized_name = extraction.normalized_name();

    if let Err(reason) = check_acceptance(
        rules,
        &normalized_name,
        extraction.condition,
        &fold_text(&raw.name),
    ) {
        return Outcome::Rejected(reason);
    }

    Outcome::Accepted(NormalizedListing {
        normalized_name,
        original_name: raw.name.clone(),
        brand: extraction.brand,
        condition: extraction.condition,
        sim_type: extraction.sim_type,
        storage_capacity: extraction.storage_capacity,
        price: raw.price.clone(),
        url: raw.url.clone().unwrap_or_default(),
    })
}
