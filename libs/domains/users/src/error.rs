use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Whether the store rejected the write because the email is taken.
    ///
    /// Callers still receive the error unchanged; this only classifies it.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            UserError::DuplicateEmail(_) => true,
            UserError::Database(err) => {
                matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
            }
        }
    }
}
