//! Serve CLI command

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{self, state::AppState};
use crate::config::Config;
use crate::storage::memory::MemoryStore;
use crate::storage::sqlite::SqliteStore;
use crate::storage::TaskStore;

/// Execute the serve command
pub async fn execute(port: Option<u16>, db: Option<PathBuf>, in_memory: bool) {
    init_tracing();

    let config = Config::from_env();
    let port = port.unwrap_or(config.port);
    let db_path = db.unwrap_or(config.db_path);

    let store: Arc<dyn TaskStore> = if in_memory {
        tracing::warn!("in-memory store: tasks will not survive a restart");
        Arc::new(MemoryStore::new())
    } else {
        match SqliteStore::open(&db_path) {
            Ok(store) => {
                tracing::info!(db = %db_path.display(), "opened task database");
                Arc::new(store)
            }
            Err(e) => {
                eprintln!("Failed to open task database {}: {}", db_path.display(), e);
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = api::start_server(port, AppState::new(store)).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Install the global tracing subscriber.
/// Log level comes from RUST_LOG, default "info".
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
