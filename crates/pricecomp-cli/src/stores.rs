use pricecomp_core::{AppConfig, StoresFile};

/// Print the store registry with each store's harvest file and whether it
/// is present in the input dir.
pub(crate) fn print_stores(config: &AppConfig, stores_file: &StoresFile) {
    if stores_file.stores.is_empty() {
        println!(
            "no stores configured in {}",
            config.stores_path.display()
        );
        return;
    }

    let header = format!("{:<16}{:<16}{:<9}{:<24}PRESENT", "NAME", "SLUG", "ENABLED", "FILE");
    println!("{header}");
    for store in &stores_file.stores {
        let file = store.input_file_name();
        let present = config.input_path(&file).exists();
        println!(
            "{:<16}{:<16}{:<9}{:<24}{}",
            store.name,
            store.slug(),
            if store.enabled { "yes" } else { "no" },
            file,
            if present { "yes" } else { "no" },
        );
    }
}
