use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// A create, update or delete failed and its unit of work was rolled back.
    #[error("{source}")]
    Write {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{0}")]
    Read(#[source] sqlx::Error),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DbError {
    /// Classify a failure raised while a unit of work was executing.
    pub(crate) fn write(operation: &'static str, source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::Database(ref e) if e.is_unique_violation() => {
                DbError::Duplicate(e.message().to_string())
            }
            source => DbError::Write { operation, source },
        }
    }

    /// True when the session to the backing store is gone rather than the
    /// statement being rejected.
    pub fn is_connectivity(&self) -> bool {
        let source = match self {
            DbError::Connect(_) => return true,
            DbError::Io(_) => return true,
            DbError::Sqlx(e) | DbError::Read(e) | DbError::Write { source: e, .. } => e,
            _ => return false,
        };

        matches!(
            source,
            sqlx::Error::Io(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        )
    }
}
