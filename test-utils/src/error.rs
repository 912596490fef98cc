use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary directory or settings file could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Seed settings could not be encoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
