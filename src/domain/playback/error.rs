use super::engine::EngineError;
use super::remote::RemoteError;

/// Message shown when the premium endpoint cannot be reached.
pub const REMOTE_UNAVAILABLE_REASON: &str = "Could not connect to the server";

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("a playback operation is already active")]
    AlreadyActive,
    #[error("speech engine error: {0}")]
    EngineError(#[from] EngineError),
    #[error("{}", REMOTE_UNAVAILABLE_REASON)]
    RemoteUnavailable(#[source] RemoteError),
}

impl From<RemoteError> for PlaybackError {
    fn from(err: RemoteError) -> Self {
        PlaybackError::RemoteUnavailable(err)
    }
}
