//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("\"{0}\" is not a valid name for a project. Please use a valid identifier name (alphanumeric).")]
    InvalidProjectName(String),

    #[error("invalid pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("empty command line")]
    EmptyCommandLine,
}
