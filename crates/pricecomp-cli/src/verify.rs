//! `verify` command handler: seminuevo regression check over the files on
//! disk.

use pricecomp_core::{AppConfig, NormalizedListing, StoreConfig, StoresFile};
use pricecomp_normalizer::{audit_store, parse_documents, RuleSet, SeminuevoAudit};

use crate::normalize::read_text;

/// Compare raw and normalized files for each selected store and print how
/// many seminuevo listings were lost.
///
/// # Errors
///
/// Returns an error if the store filter matches nothing or no store could be
/// audited.
pub(crate) async fn run_verify(
    config: &AppConfig,
    stores_file: &StoresFile,
    store_filter: Option<&str>,
) -> anyhow::Result<()> {
    let stores = stores_file.select(store_filter)?;
    let rules = RuleSet::new();

    let mut total = SeminuevoAudit {
        store: "TOTAL".to_string(),
        ..SeminuevoAudit::default()
    };
    let mut failed = 0usize;

    for store in &stores {
        match audit_one(&rules, config, store).await {
            Ok(audit) => {
                print_audit(&audit);
                total.absorb(&audit);
            }
            Err(e) => {
                tracing::error!(store = %store.name, error = %e, "seminuevo audit failed");
                failed += 1;
            }
        }
    }

    if !stores.is_empty() && failed == stores.len() {
        anyhow::bail!("no store could be audited");
    }

    print_audit(&total);
    Ok(())
}

/// Audit one store from its raw harvest and its normalized output.
pub(crate) async fn audit_one(
    rules: &RuleSet,
    config: &AppConfig,
    store: &StoreConfig,
) -> anyhow::Result<SeminuevoAudit> {
    let raw = read_text(&config.input_path(&store.input_file_name())).await?;
    let records = parse_documents(&raw)?.records;

    let normalized_path = config.output_path(&store.output_file_name());
    let listings: Vec<NormalizedListing> =
        serde_json::from_str(&read_text(&normalized_path).await?).map_err(|e| {
            anyhow::anyhow!("failed to parse {}: {e}", normalized_path.display())
        })?;

    Ok(audit_store(rules, &store.slug(), &records, &listings))
}

fn print_audit(audit: &SeminuevoAudit) {
    println!("=== {} ===", audit.store.to_uppercase());
    println!("raw listings:             {}", audit.raw_total);
    println!("normalized listings:      {}", audit.normalized_total);
    println!("seminuevo patterns (raw): {}", audit.seminuevo_patterns);
    println!("normalized as SEMINUEVO:  {}", audit.seminuevo_normalized);

    match audit.difference() {
        0 => println!("ok: every seminuevo listing was kept"),
        d if d < 0 => println!("ok: {} additional seminuevo listings detected", -d),
        _ => {
            println!("LOST: {} seminuevo listings", audit.lost());
            for (i, name) in audit.samples.iter().enumerate() {
                println!("  {}. {name}", i + 1);
            }
        }
    }
    println!();
}
