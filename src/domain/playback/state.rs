use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the controller currently stands. Drives all control enablement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "camelCase")]
pub enum PlaybackState {
    Idle,
    Speaking,
    Paused,
    RemoteLoading,
    Finished,
    Error(String),
}

impl PlaybackState {
    /// An operation is in flight and new submissions must be refused.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Speaking | Self::Paused | Self::RemoteLoading)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_active()
    }

    pub fn can_pause(&self) -> bool {
        matches!(self, Self::Speaking)
    }

    pub fn can_resume(&self) -> bool {
        matches!(self, Self::Paused)
    }

    pub fn can_stop(&self) -> bool {
        self.is_active()
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Speaking => write!(f, "speaking"),
            Self::Paused => write!(f, "paused"),
            Self::RemoteLoading => write!(f, "remote_loading"),
            Self::Finished => write!(f, "finished"),
            Self::Error(reason) => write!(f, "error: {}", reason),
        }
    }
}

/// What subscribers see after every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub state: PlaybackState,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}
