//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock is needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use storefront_core::money::PESO_SIGN;
use storefront_core::Money;

pub const ENV_DB_PATH: &str = "STOREFRONT_DB_PATH";
pub const ENV_CURRENCY_CODE: &str = "STOREFRONT_CURRENCY_CODE";
pub const ENV_CURRENCY_SYMBOL: &str = "STOREFRONT_CURRENCY_SYMBOL";

const DB_FILE_NAME: &str = "storefront.db";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// SQLite catalog file.
    pub database_path: PathBuf,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Database: platform data dir, `storefront.db`
    /// - Currency: PHP (₱)
    fn default() -> Self {
        ConfigState {
            database_path: default_database_path(),
            currency_code: "PHP".to_string(),
            currency_symbol: PESO_SIGN.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_DB_PATH`: Override the catalog database file
    /// - `STOREFRONT_CURRENCY_CODE`: Override the currency code
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(path) = lookup(ENV_DB_PATH).filter(|p| !p.is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(code) = lookup(ENV_CURRENCY_CODE).filter(|c| !c.is_empty()) {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL).filter(|s| !s.is_empty()) {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount with the configured symbol, always two decimals.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_centavos(12000)), "₱120.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.storefront.menu/storefront.db`
/// - **Windows**: `%APPDATA%\storefront\menu\data\storefront.db`
/// - **Linux**: `~/.local/share/menu/storefront.db`
///
/// Falls back to the working directory when no home directory is known.
pub fn default_database_path() -> PathBuf {
    match ProjectDirs::from("com", "storefront", "menu") {
        Some(dirs) => dirs.data_dir().join(DB_FILE_NAME),
        None => PathBuf::from(DB_FILE_NAME),
    }
}
