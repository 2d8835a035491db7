//! # Storefront Library
//!
//! Orchestration layer for the restaurant storefront: opens the catalog
//! store, holds the session state, and exposes the commands the
//! presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (tracing, bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── cart.rs     ◄─── Cart ledger behind a Mutex
//! │   ├── catalog.rs  ◄─── Menu snapshot
//! │   ├── settings.rs ◄─── Site settings snapshot
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Menu read + refresh
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── settings.rs ◄─── Site settings
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{CartState, CatalogState, ConfigState, DbState, SettingsState};
use storefront_db::{Database, DbConfig};

/// All state for one storefront session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Determine Database Path ──────────────────────────────────────────► │
/// │     • STOREFRONT_DB_PATH, else the platform data directory              │
/// │                                                                         │
/// │  2. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  3. Load Snapshots ───────────────────────────────────────────────────► │
/// │     • CatalogState: active categories + all menu items                  │
/// │     • SettingsState: site settings with defaults                        │
/// │                                                                         │
/// │  4. Empty CartState                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct Storefront {
    pub db: DbState,
    pub cart: CartState,
    pub catalog: CatalogState,
    pub settings: SettingsState,
    pub config: ConfigState,
}

impl Storefront {
    /// Opens the configured database file and loads the snapshots.
    pub async fn open(config: ConfigState) -> Result<Self, ApiError> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApiError::internal(format!(
                        "Could not create data directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        info!(path = %config.database_path.display(), "Database path determined");

        let db = Database::new(DbConfig::new(config.database_path.clone())).await?;
        Self::with_database(db, config).await
    }

    /// Builds the session on an already opened database.
    pub async fn with_database(db: Database, config: ConfigState) -> Result<Self, ApiError> {
        let catalog = CatalogState::new();
        catalog.refetch(&db).await?;

        let settings = SettingsState::new();
        settings.refetch(&db).await?;

        info!("State initialized");

        Ok(Storefront {
            db: DbState::new(db),
            cart: CartState::new(),
            catalog,
            settings,
            config,
        })
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=trace` - Trace the pricing and cart crate only
/// - Default: INFO level, sqlx at WARN
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
