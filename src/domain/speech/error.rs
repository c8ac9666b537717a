use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("text too large: {0}")]
    TooLarge(String),
}

impl From<AppError> for SpeechServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => SpeechServiceError::Invalid(msg),
            AppError::PayloadTooLarge(msg) => SpeechServiceError::TooLarge(msg),
            _ => SpeechServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            SpeechServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
