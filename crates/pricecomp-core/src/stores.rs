use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_enabled() -> bool {
    true
}

/// One retailer catalog harvested by the spiders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub name: String,
    /// Raw harvest file name inside the input dir. Defaults to `<slug>.json`.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl StoreConfig {
    /// Generate a URL-safe slug from the store name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    #[must_use]
    pub fn input_file_name(&self) -> String {
        self.file
            .clone()
            .unwrap_or_else(|| format!("{}.json", self.slug()))
    }

    #[must_use]
    pub fn output_file_name(&self) -> String {
        format!("{}_normalized.json", self.slug())
    }
}

#[derive(Debug, Deserialize)]
pub struct StoresFile {
    pub stores: Vec<StoreConfig>,
}

impl StoresFile {
    /// Enabled stores, optionally restricted to the one matching `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `slug` names no known store.
    pub fn select(&self, slug: Option<&str>) -> Result<Vec<&StoreConfig>, ConfigError> {
        match slug {
            Some(wanted) => self
                .stores
                .iter()
                .find(|s| s.slug() == wanted)
                .map(|s| vec![s])
                .ok_or_else(|| ConfigError::Validation(format!("store '{wanted}' not found"))),
            None => Ok(self.stores.iter().filter(|s| s.enabled).collect()),
        }
    }
}

/// Load and validate the store registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_stores(path: &Path) -> Result<StoresFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StoresFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let stores_file: StoresFile = serde_yaml::from_str(&content)?;

    validate_stores(&stores_file)?;

    Ok(stores_file)
}

fn validate_stores(stores_file: &StoresFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for store in &stores_file.stores {
        if store.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store name must be non-empty".to_string(),
            ));
        }

        if store.file.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "store '{}' has an empty file name",
                store.name
            )));
        }

        let lower_name = store.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate store name: '{}'",
                store.name
            )));
        }

        let slug = store.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate store slug: '{}' (from store '{}')",
                slug, store.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "stores_test.rs"]
mod tests;
