//! # Settings Repository
//!
//! Key/value rows behind the site settings snapshot.
//!
//! ```text
//! update(id, value)     UPDATE only; unknown key → DbError::NotFound
//! upsert(rows)          INSERT .. ON CONFLICT(id) DO UPDATE, one transaction
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use storefront_core::SiteSettingRow;

#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// All stored rows ordered by key.
    pub async fn fetch_all(&self) -> DbResult<Vec<SiteSettingRow>> {
        let rows = sqlx::query_as::<_, SiteSettingRow>(
            r#"
            SELECT id, value, setting_type
            FROM site_settings
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched site settings");
        Ok(rows)
    }

    /// Overwrites the value of an existing key.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - key was never stored
    pub async fn update(&self, id: &str, value: &str) -> DbResult<()> {
        debug!(id = %id, "Updating site setting");

        let result = sqlx::query(
            r#"
            UPDATE site_settings
            SET value = ?2, updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Site setting", id));
        }

        Ok(())
    }

    /// Inserts missing keys and overwrites existing ones.
    ///
    /// All rows are written or none are.
    pub async fn upsert(&self, rows: &[SiteSettingRow]) -> DbResult<()> {
        if rows.is_empty() {
            return Ok(());
        }

        debug!(count = rows.len(), "Upserting site settings");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO site_settings (id, value, setting_type, updated_at)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(id) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(&row.id)
            .bind(&row.value)
            .bind(&row.setting_type)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_db;
    use storefront_core::{SiteSettings, SiteSettingsUpdate};

    #[tokio::test]
    async fn test_empty_store_yields_defaults() {
        let db = test_db().await;
        let rows = db.settings().fetch_all().await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(SiteSettings::from_rows(&rows), SiteSettings::default());
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_overwrites() {
        let db = test_db().await;
        let repo = db.settings();

        repo.upsert(&[
            SiteSettingRow::text("site_name", "Kape Kanto"),
            SiteSettingRow::text("currency", "₱"),
        ])
        .await
        .unwrap();

        let update = SiteSettingsUpdate {
            site_name: Some("Kape Kanto Makati".to_string()),
            ..Default::default()
        };
        repo.upsert(&update.into_rows()).await.unwrap();

        let rows = repo.fetch_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "currency");
        assert_eq!(rows[1].value, "Kape Kanto Makati");
        assert_eq!(rows[1].setting_type, "text");

        let settings = SiteSettings::from_rows(&rows);
        assert_eq!(settings.site_name, "Kape Kanto Makati");
        assert_eq!(settings.currency, "₱");
    }

    #[tokio::test]
    async fn test_update_requires_existing_key() {
        let db = test_db().await;
        let repo = db.settings();

        let err = repo.update("site_name", "Kape Kanto").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        repo.upsert(&[SiteSettingRow::text("site_name", "Old")])
            .await
            .unwrap();
        repo.update("site_name", "New").await.unwrap();

        let rows = repo.fetch_all().await.unwrap();
        assert_eq!(rows[0].value, "New");
    }
}
