//! `normalize` command handler.
//!
//! Stores are processed concurrently and independently: a store whose file
//! is missing or unreadable is logged and recorded in the run summary, and
//! the remaining stores still run.

use std::path::Path;

use futures::stream::{self, StreamExt};
use serde::Serialize;

use pricecomp_core::{AppConfig, RunSummary, StoreConfig, StoreFailure, StoreStats, StoresFile};
use pricecomp_normalizer::{normalize_store, RuleSet};

/// Written to the output dir after every non-dry run.
pub(crate) const SUMMARY_FILE_NAME: &str = "run_summary.json";

/// Outcome of processing a single store.
pub(crate) enum StoreOutcome {
    Ok(StoreStats),
    Err(anyhow::Error),
}

/// Normalize every selected store and write one output file per store plus
/// the run summary.
///
/// When `dry_run` is `true` nothing is written; statistics are still
/// computed and printed.
///
/// # Errors
///
/// Returns an error if the store filter matches nothing, the output dir
/// cannot be created, the summary cannot be written, or every store failed.
pub(crate) async fn run_normalize(
    config: &AppConfig,
    stores_file: &StoresFile,
    store_filter: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let stores = stores_file.select(store_filter)?;
    if stores.is_empty() {
        println!("no enabled stores configured");
        return Ok(());
    }

    if !dry_run {
        tokio::fs::create_dir_all(&config.output_dir)
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "failed to create output dir {}: {e}",
                    config.output_dir.display()
                )
            })?;
    }

    let rules = RuleSet::new();
    let store_count = stores.len();
    let max_concurrent = config.max_concurrent_stores.max(1);

    let results: Vec<(&StoreConfig, StoreOutcome)> = stream::iter(stores)
        .map(|store| {
            let rules = &rules;
            async move { (store, process_store(rules, config, store, dry_run).await) }
        })
        .buffer_unordered(max_concurrent)
        .collect()
        .await;

    let mut succeeded = Vec::new();
    let mut failed = Vec::new();
    for (store, outcome) in results {
        match outcome {
            StoreOutcome::Ok(stats) => succeeded.push(stats),
            StoreOutcome::Err(e) => {
                tracing::error!(store = %store.name, error = %e, "store normalization failed");
                failed.push(StoreFailure {
                    store: store.slug(),
                    error: format!("{e:#}"),
                });
            }
        }
    }

    if !failed.is_empty() {
        tracing::warn!(
            failed_stores = failed.len(),
            total_stores = store_count,
            "some stores failed normalization"
        );
    }

    let summary = RunSummary::new(succeeded, failed);
    print_summary(&summary, dry_run);

    if !dry_run {
        let path = config.output_path(SUMMARY_FILE_NAME);
        write_json(&path, &summary).await?;
        tracing::info!(path = %path.display(), "run summary written");
    }

    if summary.all_failed() {
        anyhow::bail!("all {store_count} stores failed normalization");
    }

    Ok(())
}

/// Normalize one store, capturing any failure in the outcome.
pub(crate) async fn process_store(
    rules: &RuleSet,
    config: &AppConfig,
    store: &StoreConfig,
    dry_run: bool,
) -> StoreOutcome {
    match normalize_one(rules, config, store, dry_run).await {
        Ok(stats) => StoreOutcome::Ok(stats),
        Err(e) => StoreOutcome::Err(e),
    }
}

async fn normalize_one(
    rules: &RuleSet,
    config: &AppConfig,
    store: &StoreConfig,
    dry_run: bool,
) -> anyhow::Result<StoreStats> {
    let slug = store.slug();
    let input = config.input_path(&store.input_file_name());
    tracing::info!(store = %slug, path = %input.display(), "normalizing store");

    let content = read_text(&input).await?;
    let batch = normalize_store(rules, &slug, &content)?;

    if !dry_run {
        let output = config.output_path(&store.output_file_name());
        write_json(&output, &batch.listings).await?;
        tracing::info!(
            store = %slug,
            listings = batch.listings.len(),
            path = %output.display(),
            "normalized listings written"
        );
    }

    Ok(batch.stats)
}

pub(crate) async fn read_text(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))
}

pub(crate) async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    if dry_run {
        println!("dry-run: no files written");
    }

    let header = format!(
        "{:<16}{:>8}{:>10}{:>10}{:>8}{:>11}",
        "STORE", "TOTAL", "ACCEPTED", "REJECTED", "NUEVO", "SEMINUEVO"
    );
    println!("{header}");
    for stats in &summary.stores {
        println!(
            "{:<16}{:>8}{:>10}{:>10}{:>8}{:>11}",
            stats.store,
            stats.total,
            stats.accepted,
            stats.rejected,
            stats.condition_count(pricecomp_core::Condition::Nuevo),
            stats.condition_count(pricecomp_core::Condition::Seminuevo),
        );
    }
    for failure in &summary.failed_stores {
        println!("{:<16}FAILED: {}", failure.store, failure.error);
    }
    println!("accepted listings: {}", summary.total_accepted());
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
