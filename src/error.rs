// src/error.rs

use std::fmt;

/// Global application error enum.
/// Every failure in the seeding pipeline is terminal for the run; there is
/// no retry policy anywhere.
#[derive(Debug)]
pub enum AppError {
    /// Persistence-layer failure: connectivity, constraint violation,
    /// failed migration.
    Database(String),

    /// Password hashing failure.
    Hash(String),

    /// Fixture file missing, malformed, or failing validation.
    Fixture(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "database error: {}", msg),
            AppError::Hash(msg) => write!(f, "password hashing error: {}", msg),
            AppError::Fixture(msg) => write!(f, "fixture error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `sqlx::Error` into `AppError::Database`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Fixture(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Fixture(err.to_string())
    }
}
