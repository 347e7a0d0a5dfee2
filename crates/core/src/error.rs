use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised before any statement reaches the database.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = StdResult<T, AppError>;
