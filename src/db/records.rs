//! Named string records, one row per key.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;

/// Fetch the value stored under `key`, if any
pub async fn get_record(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value = sqlx::query_scalar::<_, String>(
        r#"
        SELECT value FROM records
        WHERE key = ?
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await
    .with_context(|| format!("Failed to read record {key}"))?;

    Ok(value)
}

/// Insert or replace the value stored under `key`
pub async fn put_record(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    let updated_at = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO records (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(updated_at)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to write record {key}"))?;

    Ok(())
}

/// Remove the record under `key`; returns whether one existed
pub async fn delete_record(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM records
        WHERE key = ?
        "#,
    )
    .bind(key)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to delete record {key}"))?;

    Ok(result.rows_affected() > 0)
}
