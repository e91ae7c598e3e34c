//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    App(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::App(ApplicationError::Domain(e))
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::App(e) => match e {
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
                ApplicationError::InvalidRecord { .. } => crate::exitcode::DATAERR,
                ApplicationError::Domain(d) => match d {
                    DomainError::NotFound(_) => crate::exitcode::NOINPUT,
                    _ => crate::exitcode::DATAERR,
                },
            },
        }
    }
}
