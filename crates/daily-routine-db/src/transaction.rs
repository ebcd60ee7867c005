// Unit of work for the mutating activity operations.
//
// A `UnitOfWork` owns an open transaction on the session. Committing or
// rolling back consumes it; dropping it without either rolls back. In every
// case the connection goes back to the pool in autocommit mode, including
// when commit or rollback itself fails.

use crate::connection::Database;
use crate::error::{DbError, Result};
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, Transaction};
use tracing::{debug, warn};

/// Rows touched by a committed statement.
///
/// Zero is a successful outcome: update and delete of an unknown id
/// change nothing and do not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub rows_affected: u64,
}

impl WriteOutcome {
    pub fn is_noop(&self) -> bool {
        self.rows_affected == 0
    }
}

pub struct UnitOfWork {
    operation: &'static str,
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    pub async fn begin(db: &Database, operation: &'static str) -> Result<Self> {
        let tx = db.pool()?.begin().await.map_err(|e| DbError::write(operation, e))?;
        debug!(operation, "Unit of work started");

        Ok(Self { operation, tx })
    }

    pub async fn execute<'q>(
        &mut self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Result<WriteOutcome> {
        let result = query
            .execute(&mut *self.tx)
            .await
            .map_err(|e| DbError::write(self.operation, e))?;

        Ok(WriteOutcome { rows_affected: result.rows_affected() })
    }

    pub async fn commit(self) -> Result<()> {
        let operation = self.operation;
        self.tx.commit().await.map_err(|e| DbError::write(operation, e))?;
        debug!(operation, "Unit of work committed");

        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        let operation = self.operation;
        self.tx.rollback().await.map_err(|e| DbError::write(operation, e))?;
        debug!(operation, "Unit of work rolled back");

        Ok(())
    }

    /// Run one statement as an atomic unit: commit on success, roll back on
    /// failure. The statement's error is returned even if the rollback also
    /// fails.
    pub async fn run<'q>(
        db: &Database,
        operation: &'static str,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Result<WriteOutcome> {
        let mut unit = Self::begin(db, operation).await?;

        match unit.execute(query).await {
            Ok(outcome) => {
                unit.commit().await?;
                Ok(outcome)
            }
            Err(e) => {
                if let Err(rollback_err) = unit.rollback().await {
                    warn!(operation, "Rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
