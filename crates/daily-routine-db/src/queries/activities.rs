use crate::connection::Database;
use crate::error::{DbError, Result};
use crate::models::DbActivity;
use crate::transaction::{UnitOfWork, WriteOutcome};
use daily_routine_common::{Activity, ActivityFields};

pub struct ActivityQueries;

impl ActivityQueries {
    pub async fn create(db: &Database, activity: &Activity) -> Result<WriteOutcome> {
        let query = sqlx::query(
            r#"
            INSERT INTO activities
            (id, name, description, date, start_time, end_time, role)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&activity.id)
        .bind(&activity.name)
        .bind(&activity.description)
        .bind(activity.date)
        .bind(activity.start_time)
        .bind(activity.end_time)
        .bind(activity.role.as_str());

        match UnitOfWork::run(db, "create", query).await {
            Err(DbError::Duplicate(_)) => {
                Err(DbError::Duplicate(format!("Activity '{}' already exists", activity.id)))
            }
            other => other,
        }
    }

    /// Every row in storage order.
    pub async fn list(db: &Database) -> Result<Vec<DbActivity>> {
        let pool = db.pool()?;

        sqlx::query_as::<_, DbActivity>(
            "SELECT id, name, description, date, start_time, end_time, role FROM activities",
        )
        .fetch_all(pool)
        .await
        .map_err(DbError::Read)
    }

    pub async fn update(db: &Database, id: &str, fields: &ActivityFields) -> Result<WriteOutcome> {
        let query = sqlx::query(
            r#"
            UPDATE activities
            SET name = ?, description = ?, date = ?, start_time = ?, end_time = ?, role = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.date)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(fields.role.as_str())
        .bind(id);

        UnitOfWork::run(db, "update", query).await
    }

    pub async fn delete(db: &Database, id: &str) -> Result<WriteOutcome> {
        let query = sqlx::query("DELETE FROM activities WHERE id = ?").bind(id);

        UnitOfWork::run(db, "delete", query).await
    }
}
