use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("No LLM credentials available: request carried no OAuth token and no fallback API key is configured")]
    MissingCredentials,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
