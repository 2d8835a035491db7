//! # Settings State
//!
//! Snapshot of the site settings with defaults filled in.
//!
//! Starts out as [`SiteSettings::default`] so the storefront can render
//! before the store has answered.

use std::sync::{Arc, RwLock};

use storefront_core::{SiteSettings, SiteSettingsUpdate};
use storefront_db::{Database, DbResult};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    settings: Arc<RwLock<SiteSettings>>,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> SiteSettings {
        self.settings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, settings: SiteSettings) {
        let mut current = self.settings.write().unwrap_or_else(|poisoned| {
            warn!("Settings lock poisoned, recovering");
            poisoned.into_inner()
        });
        *current = settings;
    }

    /// Reloads the snapshot from the store.
    ///
    /// On error the previous snapshot stays in place.
    pub async fn refetch(&self, db: &Database) -> DbResult<SiteSettings> {
        let rows = db.settings().fetch_all().await?;
        let settings = SiteSettings::from_rows(&rows);

        info!(site_name = %settings.site_name, "Site settings loaded");

        self.set(settings.clone());
        Ok(settings)
    }

    /// Overwrites one stored key, then reloads.
    ///
    /// Unknown keys fail with `DbError::NotFound` and leave the snapshot alone.
    pub async fn update_one(&self, db: &Database, id: &str, value: &str) -> DbResult<SiteSettings> {
        db.settings().update(id, value).await?;
        self.refetch(db).await
    }

    /// Writes the changed keys, then reloads.
    pub async fn update(&self, db: &Database, update: SiteSettingsUpdate) -> DbResult<SiteSettings> {
        let rows = update.into_rows();
        debug!(keys = rows.len(), "Updating site settings");

        db.settings().upsert(&rows).await?;
        self.refetch(db).await
    }
}
