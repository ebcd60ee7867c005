use crate::error::{DbError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// The single session to the backing store.
///
/// The pool is capped at one connection, so every operation runs on the
/// same session for the life of the program.
pub struct Database {
    pub pool: Option<Pool<Sqlite>>,
}

impl Database {
    pub async fn new(config: DatabaseConfig) -> Result<Self> {
        let pool = Self::create_pool(&config).await?;

        Ok(Self { pool: Some(pool) })
    }

    async fn create_pool(config: &DatabaseConfig) -> Result<Pool<Sqlite>> {
        let path = Path::new(&config.path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                info!("Created database directory: {}", parent.display());
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", config.path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(DbError::Connect)?;

        info!("Database session opened: {}", config.path);

        Ok(pool)
    }

    pub fn pool(&self) -> Result<&Pool<Sqlite>> {
        self.pool
            .as_ref()
            .ok_or_else(|| DbError::InvalidData("Database pool not initialized".to_string()))
    }

    pub async fn close(mut self) {
        if let Some(pool) = self.pool.take() {
            pool.close().await;
            info!("Database session closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_database_creation() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let config = DatabaseConfig { path: db_path.to_str().unwrap().to_string() };

        let db = Database::new(config).await.unwrap();
        assert!(db.pool.is_some());

        let pool = db.pool().unwrap();
        let result: i32 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await.unwrap();

        assert_eq!(result, 1);
    }

    #[tokio::test]
    async fn test_database_with_subdirectory() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("subdir").join("test.db");

        let config = DatabaseConfig { path: db_path.to_str().unwrap().to_string() };

        let db = Database::new(config).await.unwrap();
        assert!(db.pool.is_some());
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_unreachable_path_is_connect_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        // The parent "directory" is a regular file, so nothing can be opened.
        let db_path = blocker.join("test.db");
        let config = DatabaseConfig { path: db_path.to_str().unwrap().to_string() };

        let err = Database::new(config).await.err().unwrap();
        assert!(err.is_connectivity());
    }

    #[tokio::test]
    async fn test_database_close() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let config = DatabaseConfig { path: db_path.to_str().unwrap().to_string() };

        let db = Database::new(config).await.unwrap();
        db.close().await;
    }
}
