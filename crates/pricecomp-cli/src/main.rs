mod normalize;
mod stores;
mod verify;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pricecomp")]
#[command(about = "Normalize scraped store listings for price comparison")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize raw store harvests into comparable listings
    Normalize {
        /// Restrict the run to a single store (by slug)
        #[arg(long)]
        store: Option<String>,

        /// Normalize and report statistics without writing any files
        #[arg(long)]
        dry_run: bool,
    },
    /// Check that seminuevo listings survived normalization
    Verify {
        /// Restrict the check to a single store (by slug)
        #[arg(long)]
        store: Option<String>,
    },
    /// List the configured stores
    Stores,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = pricecomp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let stores_file = pricecomp_core::load_stores(&config.stores_path)?;

    match cli.command {
        Commands::Normalize { store, dry_run } => {
            normalize::run_normalize(&config, &stores_file, store.as_deref(), dry_run).await
        }
        Commands::Verify { store } => {
            verify::run_verify(&config, &stores_file, store.as_deref()).await
        }
        Commands::Stores => {
            stores::print_stores(&config, &stores_file);
            Ok(())
        }
    }
}
