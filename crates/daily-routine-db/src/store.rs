use crate::connection::{Database, DatabaseConfig};
use crate::error::Result;
use crate::queries::ActivityQueries;
use crate::transaction::WriteOutcome;
use daily_routine_common::{Activity, ActivityFields};
use tracing::{info, warn};

/// Create, list, update and delete over the `activities` table.
///
/// Each mutating call is its own unit of work. Nothing is cached; `list`
/// always reads the table again.
pub struct ActivityStore {
    db: Database,
}

impl ActivityStore {
    /// Open the session and make sure the table exists.
    pub async fn open(config: DatabaseConfig) -> Result<Self> {
        let db = Database::new(config).await?;
        db.ensure_schema().await?;

        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub async fn create(&self, activity: &Activity) -> Result<WriteOutcome> {
        let outcome = ActivityQueries::create(&self.db, activity).await?;
        info!("Added activity {} ({})", activity.id, activity.role);

        Ok(outcome)
    }

    pub async fn list(&self) -> Result<Vec<Activity>> {
        ActivityQueries::list(&self.db).await?.into_iter().map(Activity::try_from).collect()
    }

    /// Overwrite every field but the id. An unknown id updates nothing and
    /// still succeeds; check [`WriteOutcome::is_noop`] to tell.
    pub async fn update(&self, id: &str, fields: &ActivityFields) -> Result<WriteOutcome> {
        let outcome = ActivityQueries::update(&self.db, id, fields).await?;
        if outcome.is_noop() {
            warn!("Update matched no activity with id {}", id);
        } else {
            info!("Updated activity {}", id);
        }

        Ok(outcome)
    }

    pub async fn delete(&self, id: &str) -> Result<WriteOutcome> {
        let outcome = ActivityQueries::delete(&self.db, id).await?;
        if outcome.is_noop() {
            warn!("Delete matched no activity with id {}", id);
        } else {
            info!("Deleted {} activity row(s) with id {}", outcome.rows_affected, id);
        }

        Ok(outcome)
    }

    pub async fn close(self) {
        self.db.close().await;
    }
}
