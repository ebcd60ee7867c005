pub mod config;
pub mod error;
pub mod format;
pub mod parse;
pub mod types;

pub use error::{Error, Result};
pub use format::render_table;
pub use parse::{parse_date, parse_role_choice, parse_time};
pub use types::*;
