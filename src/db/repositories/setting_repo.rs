//! Setting repository

use sqlx::PgPool;

use crate::error::AppResult;

/// Repository for key-value settings
pub struct SettingRepository;

impl SettingRepository {
    /// Find a setting value by key for a store
    pub async fn find_value(pool: &PgPool, name: &str, store_id: i32) -> AppResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            r#"SELECT value FROM settings WHERE name = $1 AND store_id = $2"#,
        )
        .bind(name)
        .bind(store_id)
        .fetch_optional(pool)
        .await?;

        Ok(value)
    }

    /// Insert or update a setting value
    pub async fn upsert(pool: &PgPool, name: &str, value: &str, store_id: i32) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (name, value, store_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (name, store_id) DO UPDATE SET value = EXCLUDED.value
            "#,
        )
        .bind(name)
        .bind(value)
        .bind(store_id)
        .execute(pool)
        .await?;

        Ok(())
    }
}
