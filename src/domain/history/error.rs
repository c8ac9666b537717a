use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum HistoryServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<AppError> for HistoryServiceError {
    fn from(err: AppError) -> Self {
        HistoryServiceError::Dependency(err.to_string())
    }
}

impl From<HistoryServiceError> for AppError {
    fn from(err: HistoryServiceError) -> Self {
        match err {
            HistoryServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
