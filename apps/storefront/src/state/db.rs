//! # Database State
//!
//! Wraps the `Database` handle for use in commands.
//!
//! ## Thread Safety
//! The `Database` struct from `storefront-db` contains a `SqlitePool`
//! which is thread-safe. Commands can run queries concurrently without
//! explicit locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn refresh_catalog(db: &DbState, catalog: &CatalogState) -> Result<MenuResponse, ApiError> {
//!     catalog.refetch(db.inner()).await?;
//!     ...
//! }
//! ```

use storefront_db::Database;

#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
