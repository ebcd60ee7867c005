use chrono::{NaiveDate, NaiveTime};
use daily_routine_common::{Activity, Role};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::DbError;

/// A row of the `activities` table as stored.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbActivity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role: String,
}

impl TryFrom<DbActivity> for Activity {
    type Error = DbError;

    fn try_from(row: DbActivity) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|_| {
            DbError::InvalidData(format!("Activity {} has unknown role '{}'", row.id, row.role))
        })?;

        Ok(Activity {
            id: row.id,
            name: row.name,
            description: row.description,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            role,
        })
    }
}
