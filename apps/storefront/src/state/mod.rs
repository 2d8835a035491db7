//! # State Module
//!
//! Application state for the storefront.
//!
//! Each concern gets its own state type and commands take only the ones
//! they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront::bootstrap(config)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────┬───────┴──────┬───────────────┬──────────────┐   │
//! │       ▼              ▼              ▼               ▼              ▼   │
//! │  ┌─────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐ ┌────────┐│
//! │  │ DbState │  │ CartState  │  │CatalogState│  │SettingsSta-│ │ Config ││
//! │  │         │  │ Arc<Mutex< │  │ Arc<RwLock<│  │te Arc<Rw-  │ │ State  ││
//! │  │Database │  │   Cart>>   │  │ Snapshot>> │  │Lock<Site-  │ │        ││
//! │  │ (pool)  │  │            │  │            │  │Settings>>  │ │        ││
//! │  └─────────┘  └────────────┘  └────────────┘  └────────────┘ └────────┘│
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • CatalogState / SettingsState: snapshots swapped under RwLock        │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod db;
mod settings;

pub use cart::CartState;
pub use catalog::{CatalogSnapshot, CatalogState};
pub use config::{default_database_path, ConfigState};
pub use db::DbState;
pub use settings::SettingsState;
