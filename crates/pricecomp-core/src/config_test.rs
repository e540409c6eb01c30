use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PRICECOMP_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.stores_path, Path::new("./config/stores.yaml"));
    assert_eq!(cfg.input_dir, Path::new("price_comparison/results_scrap"));
    assert_eq!(
        cfg.output_dir,
        Path::new("price_comparison/results_normalized")
    );
    assert_eq!(cfg.max_concurrent_stores, 2);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("PRICECOMP_ENV", "production");
    map.insert("PRICECOMP_LOG_LEVEL", "debug");
    map.insert("PRICECOMP_INPUT_DIR", "/data/raw");
    map.insert("PRICECOMP_OUTPUT_DIR", "/data/out");
    map.insert("PRICECOMP_MAX_CONCURRENT_STORES", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.input_path("itech.json"), Path::new("/data/raw/itech.json"));
    assert_eq!(
        cfg.output_path("itech_normalized.json"),
        Path::new("/data/out/itech_normalized.json")
    );
    assert_eq!(cfg.max_concurrent_stores, 5);
}

#[test]
fn build_app_config_fails_with_invalid_concurrency() {
    let mut map = HashMap::new();
    map.insert("PRICECOMP_MAX_CONCURRENT_STORES", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRICECOMP_MAX_CONCURRENT_STORES"),
        "expected InvalidEnvVar(PRICECOMP_MAX_CONCURRENT_STORES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_concurrency() {
    let mut map = HashMap::new();
    map.insert("PRICECOMP_MAX_CONCURRENT_STORES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref reason, .. }) if reason.contains("at least 1")),
        "expected InvalidEnvVar for zero concurrency, got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_unknown_environment() {
    let mut map = HashMap::new();
    map.insert("PRICECOMP_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRICECOMP_ENV"));
}
