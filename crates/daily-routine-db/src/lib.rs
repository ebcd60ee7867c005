pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod schema;
pub mod store;
pub mod transaction;

pub use connection::{Database, DatabaseConfig};
pub use error::{DbError, Result};
pub use models::*;
pub use store::ActivityStore;
pub use transaction::{UnitOfWork, WriteOutcome};
