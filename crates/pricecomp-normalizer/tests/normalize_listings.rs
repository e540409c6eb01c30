//! End-to-end behaviour of `normalize_listing` on realistic store titles.
//!
//! Each test feeds raw titles through the full rule cascade and checks the
//! published record, or the reason it was withheld.

use pricecomp_core::{Brand, Condition, NormalizedListing, RawListing, RejectReason, SimType};
use pricecomp_normalizer::{normalize_listing, Outcome, RuleSet};

fn normalize(rules: &RuleSet, title: &str) -> Outcome {
    normalize_listing(rules, &RawListing::named(title))
}

fn accepted(rules: &RuleSet, title: &str) -> NormalizedListing {
    match normalize(rules, title) {
        Outcome::Accepted(listing) => listing,
        Outcome::Rejected(reason) => panic!("expected {title:?} to be accepted, got {reason:?}"),
    }
}

// ---------------------------------------------------------------------------
// Reference titles
// ---------------------------------------------------------------------------

#[test]
fn iphone_ex_display_becomes_seminuevo_handset() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "IPHONE 13 128GB AZUL EXH");
    assert_eq!(listing.brand, Some(Brand::Apple));
    assert_eq!(listing.condition, Condition::Seminuevo);
    assert_eq!(listing.storage_capacity.as_deref(), Some("128GB"));
    assert_eq!(listing.sim_type, Some(SimType::Physical));
    assert_eq!(
        listing.normalized_name,
        "APPLE IPHONE 13 SIM FISICA SEMINUEVO 128GB"
    );
    assert_eq!(listing.original_name, "IPHONE 13 128GB AZUL EXH");
}

#[test]
fn airpods_get_implicit_brand_and_no_sim() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "AIRPODS PRO 2 NUEVO");
    assert_eq!(listing.brand, Some(Brand::Apple));
    assert_eq!(listing.condition, Condition::Nuevo);
    assert_eq!(listing.sim_type, None);
    assert_eq!(listing.storage_capacity, None);
    assert_eq!(listing.normalized_name, "APPLE AIRPODS PRO 2 NUEVO");
}

#[test]
fn galaxy_semi_nuevo_dual_sim_drops_stray_dual() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "SAMSUNG GALAXY A54 256GB SEMI NUEVO DUAL SIM");
    assert_eq!(listing.brand, Some(Brand::Samsung));
    assert_eq!(listing.condition, Condition::Seminuevo);
    assert_eq!(listing.storage_capacity.as_deref(), Some("256GB"));
    assert_eq!(listing.sim_type, Some(SimType::Physical));
    assert_eq!(listing.normalized_name, "SAMSUNG A54 SIM FISICA SEMINUEVO 256GB");
    assert!(!listing.normalized_name.contains("DUAL"));
}

#[test]
fn outlet_open_box_listing_is_withheld() {
    let rules = RuleSet::new();
    assert_eq!(
        normalize(&rules, "CELULAR OUTLET OPEN BOX XIAOMI REDMI NOTE 12"),
        Outcome::Rejected(RejectReason::ConditionNotPublishable)
    );
}

// ---------------------------------------------------------------------------
// Condition rules
// ---------------------------------------------------------------------------

#[test]
fn every_ex_display_variant_is_seminuevo_in_any_case() {
    let rules = RuleSet::new();
    for title in [
        "Galaxy S23 Ultra exh",
        "Galaxy S23 Ultra EXH Premium",
        "Galaxy S23 Ultra de exh",
        "Galaxy S23 Ultra De Exh Premium",
    ] {
        let listing = accepted(&rules, title);
        assert_eq!(listing.condition, Condition::Seminuevo, "title: {title}");
        assert!(!listing.normalized_name.contains("EXH"), "title: {title}");
        assert!(!listing.normalized_name.contains("PREMIUM"), "title: {title}");
    }
}

#[test]
fn como_nuevo_beats_nuevo_and_is_withheld() {
    let rules = RuleSet::new();
    assert_eq!(
        normalize(&rules, "iPhone 12 Nuevo - Como Nuevo"),
        Outcome::Rejected(RejectReason::ConditionNotPublishable)
    );
}

#[test]
fn hyphenated_open_box_is_withheld() {
    let rules = RuleSet::new();
    for title in ["IPHONE 11 OPEN-BOX 64GB", "Galaxy S21 Open - Box 128GB"] {
        assert_eq!(
            normalize(&rules, title),
            Outcome::Rejected(RejectReason::ConditionNotPublishable),
            "title: {title}"
        );
    }
}

#[test]
fn cpo_is_withheld() {
    let rules = RuleSet::new();
    assert!(matches!(
        normalize(&rules, "iPhone 14 Pro CPO 256GB"),
        Outcome::Rejected(_)
    ));
}

#[test]
fn accented_condition_words_are_recognised() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "Motorola Edge 40 Semi-Nuévo 256GB");
    assert_eq!(listing.condition, Condition::Seminuevo);
    assert_eq!(listing.normalized_name, "MOTOROLA EDGE 40 SIM FISICA SEMINUEVO 256GB");
}

// ---------------------------------------------------------------------------
// SIM and device rules
// ---------------------------------------------------------------------------

#[test]
fn non_handsets_never_carry_a_sim_type() {
    let rules = RuleSet::new();
    for title in [
        "iPad Air 5 WiFi + Cellular eSIM 256GB",
        "Samsung Galaxy Watch 6 44mm LTE eSIM",
        "Funda iPhone 15 Pro Dual SIM",
    ] {
        assert_eq!(accepted(&rules, title).sim_type, None, "title: {title}");
    }
}

#[test]
fn handset_without_marker_gets_physical_sim() {
    let rules = RuleSet::new();
    assert_eq!(
        accepted(&rules, "Redmi Note 13 Pro 512GB").sim_type,
        Some(SimType::Physical)
    );
}

#[test]
fn esim_handset_is_virtual() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "iPhone 15 Pro Max 1TB E-SIM");
    assert_eq!(listing.sim_type, Some(SimType::Virtual));
    assert_eq!(listing.storage_capacity.as_deref(), Some("1TB"));
    assert_eq!(
        listing.normalized_name,
        "APPLE IPHONE 15 PRO MAX SIM VIRTUAL NUEVO 1TB"
    );
}

#[test]
fn conflicting_sim_markers_leave_only_the_canonical_label() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "IPHONE 15 128GB SIM FISICA + ESIM");
    assert_eq!(listing.sim_type, Some(SimType::Virtual));
    assert_eq!(
        listing.normalized_name,
        "APPLE IPHONE 15 SIM VIRTUAL NUEVO 128GB"
    );
    assert_eq!(listing.normalized_name.matches("SIM").count(), 1);
    assert!(!listing.normalized_name.contains("FISICA"));
}

#[test]
fn unhyphenated_sim_shorthand_is_recognised() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "IPHONE 15 E SIM 128GB");
    assert_eq!(listing.sim_type, Some(SimType::Virtual));
    assert_eq!(
        listing.normalized_name,
        "APPLE IPHONE 15 SIM VIRTUAL NUEVO 128GB"
    );

    let listing = accepted(&rules, "IPHONE 13 S FIS");
    assert_eq!(listing.sim_type, Some(SimType::Physical));
    assert_eq!(listing.normalized_name, "APPLE IPHONE 13 SIM FISICA NUEVO");
}

#[test]
fn galaxy_watch_is_not_a_handset() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "Samsung Galaxy Watch 6 44mm");
    assert_eq!(listing.brand, Some(Brand::Samsung));
    assert_eq!(listing.normalized_name, "SAMSUNG WATCH 6 44MM NUEVO");
}

// ---------------------------------------------------------------------------
// Capacity rules
// ---------------------------------------------------------------------------

#[test]
fn ram_figures_never_become_capacity() {
    let rules = RuleSet::new();
    for title in [
        "Poco X6 Pro 8GB",
        "Moto G84 12GB RAM",
        "Redmi 13C 8+ GB",
        "Honor X8b 8+256GB",
    ] {
        let listing = accepted(&rules, title);
        let capacity = listing.storage_capacity.unwrap_or_default();
        assert!(
            capacity.is_empty() || capacity == "256GB",
            "title: {title}, capacity: {capacity}"
        );
        assert!(!listing.normalized_name.contains("8GB"), "title: {title}");
        assert!(!listing.normalized_name.contains("12GB"), "title: {title}");
    }
}

#[test]
fn plus_model_name_is_not_mistaken_for_ram() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "IPHONE 8+ 64GB");
    assert_eq!(listing.storage_capacity, None);
    assert_eq!(listing.normalized_name, "APPLE IPHONE 8+ SIM FISICA NUEVO");
}

#[test]
fn gigabyte_spelling_of_a_terabyte_is_canonical() {
    let rules = RuleSet::new();
    assert_eq!(
        accepted(&rules, "iPhone 15 Pro 1024 GB").storage_capacity.as_deref(),
        Some("1TB")
    );
}

// ---------------------------------------------------------------------------
// Brand rules
// ---------------------------------------------------------------------------

#[test]
fn sub_brand_names_resolve_to_parent_and_leave_the_name() {
    let rules = RuleSet::new();
    let cases = [
        ("Honor X8b 256GB", Brand::Huawei, "HUAWEI X8B SIM FISICA NUEVO 256GB"),
        ("iQOO Z9 5G 256GB", Brand::Vivo, "VIVO Z9 5G SIM FISICA NUEVO 256GB"),
        ("Poco X6 Pro 512GB", Brand::Xiaomi, "XIAOMI X6 PRO SIM FISICA NUEVO 512GB"),
    ];
    for (title, brand, name) in cases {
        let listing = accepted(&rules, title);
        assert_eq!(listing.brand, Some(brand), "title: {title}");
        assert_eq!(listing.normalized_name, name, "title: {title}");
    }
}

#[test]
fn store_hint_outranks_title() {
    let rules = RuleSet::new();
    let mut raw = RawListing::named("Moto G24 128GB");
    raw.brand_hint = Some("Motorola".to_string());
    let Outcome::Accepted(listing) = normalize_listing(&rules, &raw) else {
        panic!("expected listing to be accepted");
    };
    assert_eq!(listing.normalized_name, "MOTOROLA G24 SIM FISICA NUEVO 128GB");
}

#[test]
fn unknown_hint_falls_back_to_title() {
    let rules = RuleSet::new();
    let mut raw = RawListing::named("Xiaomi Redmi Note 13 256GB");
    raw.brand_hint = Some("UNKNOWN".to_string());
    let Outcome::Accepted(listing) = normalize_listing(&rules, &raw) else {
        panic!("expected listing to be accepted");
    };
    assert_eq!(listing.brand, Some(Brand::Xiaomi));
}

#[test]
fn no_brand_token_repeats_in_output() {
    let rules = RuleSet::new();
    let listing = accepted(&rules, "Samsung Galaxy Samsung A15 Samsung 128GB");
    assert_eq!(listing.normalized_name.matches("SAMSUNG").count(), 1);
    assert!(!listing.normalized_name.contains("GALAXY"));
}

// ---------------------------------------------------------------------------
// Output-wide properties
// ---------------------------------------------------------------------------

const SAMPLE_TITLES: &[&str] = &[
    "IPHONE 13 128GB AZUL EXH",
    "AIRPODS PRO 2 NUEVO",
    "SAMSUNG GALAXY A54 256GB SEMI NUEVO DUAL SIM",
    "Xiaomi Redmi Note 13 8GB 256GB Negro 5G",
    "iPhone 15 Pro Max 1TB E-SIM",
    "Honor X8b 8+256GB Nuevo Dual",
    "JBL Flip 6 Parlante Bluetooth Negro",
    "Galaxy S23 Ultra DE EXH PREMIUM 512GB",
    "Motorola Moto G84 5G 256GB 12GB RAM Azul",
    "PlayStation 5 Slim Consola (2023)",
];

#[test]
fn normalized_names_have_no_duplicate_words() {
    let rules = RuleSet::new();
    for title in SAMPLE_TITLES {
        let listing = accepted(&rules, title);
        let words: Vec<_> = listing.normalized_name.split(' ').collect();
        let mut unique = words.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(words.len(), unique.len(), "name: {}", listing.normalized_name);
    }
}

#[test]
fn renormalizing_is_stable() {
    let rules = RuleSet::new();
    for title in SAMPLE_TITLES {
        let first = accepted(&rules, title);
        let second = accepted(&rules, &first.normalized_name);
        assert_eq!(second.normalized_name, first.normalized_name, "title: {title}");
        assert_eq!(second.brand, first.brand, "title: {title}");
        assert_eq!(second.condition, first.condition, "title: {title}");
        assert_eq!(second.storage_capacity, first.storage_capacity, "title: {title}");
        assert_eq!(second.sim_type, first.sim_type, "title: {title}");
    }
}
