use thiserror::Error;

/// Failure of a single call to the translation backend.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Request could not be sent or the response body could not be read.
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status code.
    #[error("translation backend returned status {0}")]
    Status(u16),

    /// Backend answered with a body that does not have the expected shape.
    #[error("unexpected translation response: {0}")]
    MalformedResponse(String),

    /// Backend returned nothing usable for the target language.
    #[error("empty translation for '{0}'")]
    EmptyResult(String),

    /// Translation task ended without producing a result.
    #[error("translation task aborted: {0}")]
    TaskAborted(String),
}
