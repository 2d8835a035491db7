//! # Site Settings
//!
//! Read model for the storefront's site settings.
//!
//! The store keeps settings as loose key/value rows. The storefront wants a
//! typed record where every field has a value, so missing or blank rows are
//! replaced by defaults when the snapshot is built.
//!
//! ```text
//! site_settings rows                       SiteSettings
//! ───────────────────────                  ──────────────────────────────
//! site_name    = "Kape Kanto"      ──►     site_name       "Kape Kanto"
//! currency     = ""                ──►     currency        "PHP"  (default)
//! (instagram_url missing)          ──►     instagram_url   "https://instagram.com"
//! unknown_key  = "x"               ──►     (ignored)
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

/// Setting keys known to the storefront.
pub mod keys {
    pub const SITE_NAME: &str = "site_name";
    pub const SITE_LOGO: &str = "site_logo";
    pub const SITE_DESCRIPTION: &str = "site_description";
    pub const CURRENCY: &str = "currency";
    pub const CURRENCY_CODE: &str = "currency_code";
    pub const INSTAGRAM_URL: &str = "instagram_url";

    pub const ALL: [&str; 6] = [
        SITE_NAME,
        SITE_LOGO,
        SITE_DESCRIPTION,
        CURRENCY,
        CURRENCY_CODE,
        INSTAGRAM_URL,
    ];
}

pub const DEFAULT_SITE_NAME: &str = "Beracah Cafe";
pub const DEFAULT_CURRENCY: &str = "PHP";
pub const DEFAULT_INSTAGRAM_URL: &str = "https://instagram.com";

/// Value type recorded for settings inserted by the storefront.
pub const TEXT_SETTING_TYPE: &str = "text";

// =============================================================================
// Rows
// =============================================================================

/// One stored setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SiteSettingRow {
    pub id: String,
    pub value: String,
    #[serde(default = "default_setting_type")]
    pub setting_type: String,
}

fn default_setting_type() -> String {
    TEXT_SETTING_TYPE.to_string()
}

impl SiteSettingRow {
    pub fn text(id: impl Into<String>, value: impl Into<String>) -> Self {
        SiteSettingRow {
            id: id.into(),
            value: value.into(),
            setting_type: default_setting_type(),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Typed site settings with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_logo: String,
    pub site_description: String,
    pub currency: String,
    pub currency_code: String,
    pub instagram_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            site_name: DEFAULT_SITE_NAME.to_string(),
            site_logo: String::new(),
            site_description: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            currency_code: DEFAULT_CURRENCY.to_string(),
            instagram_url: DEFAULT_INSTAGRAM_URL.to_string(),
        }
    }
}

impl SiteSettings {
    /// Builds the snapshot from stored rows.
    ///
    /// An empty value counts as absent. Unknown keys are ignored. When a
    /// key appears twice the first row wins.
    pub fn from_rows(rows: &[SiteSettingRow]) -> Self {
        let mut settings = SiteSettings::default();

        for key in keys::ALL {
            let Some(row) = rows.iter().find(|r| r.id == key) else {
                continue;
            };
            if row.value.is_empty() {
                continue;
            }
            if let Some(field) = settings.field_mut(key) {
                *field = row.value.clone();
            }
        }

        for row in rows {
            if !keys::ALL.contains(&row.id.as_str()) {
                warn!(id = %row.id, "Ignoring unknown site setting");
            }
        }

        settings
    }

    /// Looks up a value by its storage key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            keys::SITE_NAME => &self.site_name,
            keys::SITE_LOGO => &self.site_logo,
            keys::SITE_DESCRIPTION => &self.site_description,
            keys::CURRENCY => &self.currency,
            keys::CURRENCY_CODE => &self.currency_code,
            keys::INSTAGRAM_URL => &self.instagram_url,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            keys::SITE_NAME => Some(&mut self.site_name),
            keys::SITE_LOGO => Some(&mut self.site_logo),
            keys::SITE_DESCRIPTION => Some(&mut self.site_description),
            keys::CURRENCY => Some(&mut self.currency),
            keys::CURRENCY_CODE => Some(&mut self.currency_code),
            keys::INSTAGRAM_URL => Some(&mut self.instagram_url),
            _ => None,
        }
    }
}

// =============================================================================
// Update
// =============================================================================

/// Partial update; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SiteSettingsUpdate {
    pub site_name: Option<String>,
    pub site_logo: Option<String>,
    pub site_description: Option<String>,
    pub currency: Option<String>,
    pub currency_code: Option<String>,
    pub instagram_url: Option<String>,
}

impl SiteSettingsUpdate {
    /// Rows to upsert, in key order.
    pub fn into_rows(self) -> Vec<SiteSettingRow> {
        [
            (keys::SITE_NAME, self.site_name),
            (keys::SITE_LOGO, self.site_logo),
            (keys::SITE_DESCRIPTION, self.site_description),
            (keys::CURRENCY, self.currency),
            (keys::CURRENCY_CODE, self.currency_code),
            (keys::INSTAGRAM_URL, self.instagram_url),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| SiteSettingRow::text(key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clone().into_rows().is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_rows() {
        let settings = SiteSettings::from_rows(&[]);
        assert_eq!(settings, SiteSettings::default());
        assert_eq!(settings.site_name, "Beracah Cafe");
        assert_eq!(settings.currency_code, "PHP");
        assert_eq!(settings.instagram_url, "https://instagram.com");
    }

    #[test]
    fn test_rows_override_and_blank_falls_back() {
        let rows = vec![
            SiteSettingRow::text("site_name", "Kape Kanto"),
            SiteSettingRow::text("currency", ""),
            SiteSettingRow::text("site_description", "Third-wave coffee"),
            SiteSettingRow::text("unknown_key", "ignored"),
        ];

        let settings = SiteSettings::from_rows(&rows);
        assert_eq!(settings.site_name, "Kape Kanto");
        assert_eq!(settings.currency, "PHP");
        assert_eq!(settings.site_description, "Third-wave coffee");
        assert_eq!(settings.get("unknown_key"), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let rows = vec![
            SiteSettingRow::text("site_name", "First"),
            SiteSettingRow::text("site_name", "Second"),
        ];
        assert_eq!(SiteSettings::from_rows(&rows).site_name, "First");
    }

    #[test]
    fn test_get_by_key() {
        let settings = SiteSettings::default();
        assert_eq!(settings.get(keys::CURRENCY), Some("PHP"));
        assert_eq!(settings.get(keys::SITE_LOGO), Some(""));
    }

    #[test]
    fn test_update_into_rows() {
        let update = SiteSettingsUpdate {
            site_name: Some("Kape Kanto".to_string()),
            instagram_url: Some("https://instagram.com/kapekanto".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());

        let rows = update.into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "site_name");
        assert_eq!(rows[1].id, "instagram_url");
        assert_eq!(rows[1].setting_type, "text");

        assert!(SiteSettingsUpdate::default().is_empty());
    }
}
