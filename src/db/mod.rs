pub mod records;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Get the path to the database file using platform-specific data directory
pub fn get_db_path() -> Result<PathBuf> {
    let mut path = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?;

    path.push("daily-wordle");
    path.push("stats.db");
    Ok(path)
}

/// Create a connection pool to the SQLite database at `db_path`
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    migrate(&pool).await?;
    Ok(pool)
}

/// Opens the on-disk database, falling back to memory so play is never
/// blocked by storage problems.
pub async fn create_pool_or_memory(db_path: &Path) -> Result<SqlitePool> {
    match create_pool(db_path).await {
        Ok(pool) => {
            info!("Using stats database {}", db_path.display());
            Ok(pool)
        }
        Err(e) => {
            warn!("Stats will not be kept between runs: {:#}", e);
            create_memory_pool().await
        }
    }
}

/// In-memory database for tests and as a fallback when the file is unusable.
///
/// Every connection to `sqlite::memory:` opens its own database, so the pool
/// holds exactly one connection that never expires.
pub async fn create_memory_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Failed to open in-memory database")?;

    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")
}
