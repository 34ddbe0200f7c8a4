//! Error types for the chantier ecosystem.

use thiserror::Error;

/// Errors that can occur in chantier operations.
#[derive(Error, Debug)]
pub enum ChantierError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Projet non trouvé: {0}")]
    ProjectNotFound(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for chantier operations.
pub type ChantierResult<T> = Result<T, ChantierError>;
