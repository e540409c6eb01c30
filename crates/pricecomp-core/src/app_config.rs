use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Store registry, see `config/stores.yaml`.
    pub stores_path: PathBuf,
    /// Directory holding the raw `<store>.json` harvests.
    pub input_dir: PathBuf,
    /// Directory receiving `<store>_normalized.json` and the run summary.
    pub output_dir: PathBuf,
    pub max_concurrent_stores: usize,
}

impl AppConfig {
    /// Path of the raw harvest file for `file_name` inside the input dir.
    #[must_use]
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    /// Path of a normalized output file inside the output dir.
    #[must_use]
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
