use crate::connection::Database;
use crate::error::Result;
use tracing::info;

/// The `activities` table. `id` is the primary key so a repeated id is
/// rejected by the store itself.
const CREATE_ACTIVITIES: &str = r#"
    CREATE TABLE IF NOT EXISTS activities (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        date DATE NOT NULL,
        start_time TIME NOT NULL,
        end_time TIME NOT NULL,
        role TEXT NOT NULL
            CHECK (role IN ('WORK', 'LEISURE', 'HEALTH', 'EDUCATION', 'OTHER'))
    )
"#;

impl Database {
    pub async fn ensure_schema(&self) -> Result<()> {
        let pool = self.pool()?;

        sqlx::query(CREATE_ACTIVITIES).execute(pool).await?;
        info!("Activities table ready");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::DatabaseConfig;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_ensure_schema_creates_table() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let config = DatabaseConfig { path: db_path.to_str().unwrap().to_string() };

        let db = Database::new(config).await.unwrap();
        db.ensure_schema().await.unwrap();

        let pool = db.pool().unwrap();
        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        )
        .fetch_all(pool)
        .await
        .unwrap();

        let table_names: Vec<String> = tables.into_iter().map(|(name,)| name).collect();
        assert_eq!(table_names, vec!["activities".to_string()]);
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let config = DatabaseConfig { path: db_path.to_str().unwrap().to_string() };

        let db = Database::new(config).await.unwrap();
        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();
    }
}
