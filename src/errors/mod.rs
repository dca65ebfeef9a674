// Defines the application error type and a result type alias using the thiserror crate.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Auth and Validation messages are shown to the user verbatim, no prefix.
    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Validation(String),

    // The #[from] attribute automatically converts a serde_json::Error into an AppError::Parse using the From trait.
    #[error("Stored data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
