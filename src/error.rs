//! Application-wide error types.
//!
//! Each module reports its own error enum; `AppError` gathers the ones that
//! can stop start-up so `main` can hand them to `anyhow`.

pub use crate::config::ConfigError;
pub use crate::movies::MoviesError;

/// Errors that prevent the application from starting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The MovieBuffs client could not be built
    #[error("MovieBuffs API error: {0}")]
    Movies(#[from] MoviesError),

    /// A global logger was already installed
    #[error("Logger error: {0}")]
    Logger(String),
}

impl From<log::SetLoggerError> for AppError {
    fn from(error: log::SetLoggerError) -> Self {
        AppError::Logger(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
