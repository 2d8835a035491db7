//! # Settings Commands
//!
//! Site settings shown in the header and footer.

use storefront_core::{SiteSettings, SiteSettingsUpdate};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{DbState, SettingsState};

/// Gets the current site settings with defaults filled in.
pub fn get_site_settings(settings: &SettingsState) -> SiteSettings {
    debug!("get_site_settings command");
    settings.get()
}

/// Stores the given fields and returns the reloaded settings.
///
/// `None` fields are left alone. Storing an empty string resets that
/// field to its default.
pub async fn update_site_settings(
    db: &DbState,
    settings: &SettingsState,
    update: SiteSettingsUpdate,
) -> Result<SiteSettings, ApiError> {
    debug!("update_site_settings command");

    if update.is_empty() {
        return Ok(settings.get());
    }

    Ok(settings.update(db.inner(), update).await?)
}

/// Overwrites a single stored setting and returns the reloaded settings.
///
/// ## Errors
/// `NOT_FOUND` when the key has never been stored.
pub async fn update_site_setting(
    db: &DbState,
    settings: &SettingsState,
    id: String,
    value: String,
) -> Result<SiteSettings, ApiError> {
    debug!(id = %id, "update_site_setting command");
    Ok(settings.update_one(db.inner(), &id, &value).await?)
}

/// Reloads the site settings from the store.
pub async fn refresh_site_settings(
    db: &DbState,
    settings: &SettingsState,
) -> Result<SiteSettings, ApiError> {
    debug!("refresh_site_settings command");
    Ok(settings.refetch(db.inner()).await?)
}
