//! Txndesk main entry point

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;
use txndesk_api::start_server;
use txndesk_config::Config;
use txndesk_core::RecordStore;
use txndesk_seed::{EmbeddedSeed, FileSeed, SeedSource};

#[derive(Parser, Debug)]
#[command(name = "txndesk")]
#[command(author = "Txndesk Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web admin panel for branch transaction records", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[WARN] Failed to load configuration ({}), using defaults", e);
            Config::default()
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.clone()),
    )
    .init();

    let rt = Runtime::new()?;

    rt.block_on(async {
        let source: Arc<dyn SeedSource> = match config.data.seed_file.clone() {
            Some(path) => {
                eprintln!("[INFO] Seed source: file {}", path.display());
                Arc::new(FileSeed::new(path))
            }
            None => {
                eprintln!("[INFO] Seed source: embedded dataset");
                Arc::new(EmbeddedSeed::default())
            }
        };

        let store = Arc::new(RwLock::new(RecordStore::new(source)));

        {
            let guard = store.write().await;
            match guard.load().await {
                Ok(_) => eprintln!("[INFO] Seed data loaded: {} records", guard.records_count()),
                Err(e) => eprintln!("[ERROR] Failed to load seed data: {:?}", e),
            }
        }

        start_server(config, store).await
    });

    Ok(())
}
