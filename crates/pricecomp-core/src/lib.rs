//! Shared domain types and configuration for the price-comparison pipeline.

pub mod app_config;
pub mod config;
pub mod listing;
pub mod stats;
pub mod stores;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{Brand, Condition, NormalizedListing, RawListing, SimType};
pub use stats::{RejectReason, RunSummary, StoreFailure, StoreStats};
pub use stores::{load_stores, StoreConfig, StoresFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read stores file {path}: {source}")]
    StoresFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stores file: {0}")]
    StoresFileParse(#[from] serde_yaml::Error),

    #[error("stores validation failed: {0}")]
    Validation(String),
}
