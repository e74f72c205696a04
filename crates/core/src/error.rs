//! Error types shared across the system

use thiserror::Error;

/// Base error type for the domain model
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown statistic: {0}")]
    UnknownStatistic(String),
}
