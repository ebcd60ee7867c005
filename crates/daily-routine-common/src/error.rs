use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejections raised while turning user input into an [`crate::Activity`].
///
/// These are always caught before the backing store is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid date format. Please use yyyy-MM-dd format.")]
    InvalidDate(String),

    #[error("Invalid time format. Please use HH:mm format.")]
    InvalidTime(String),

    #[error("Invalid choice for Role.")]
    InvalidRoleChoice(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
