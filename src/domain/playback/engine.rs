//! Port to the platform speech engine.
//!
//! The engine speaks one utterance at a time and reports its lifecycle back
//! through the [`EngineEventSink`] it was handed in [`SpeechEngine::speak`].
//! Sinks are tagged with the utterance they belong to, so the controller can
//! drop notifications from an utterance it has already stopped.

use super::controller::ControllerInput;
use super::request::PlaybackRequest;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

/// One entry of the platform voice catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub id: String,
    pub name: String,
    pub lang: String,
    /// Flagged by the platform as its default voice.
    pub is_default: bool,
}

/// Lifecycle notifications fired by the engine for a single utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Start,
    Pause,
    Resume,
    End,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct EngineError(pub String);

/// Handle the engine uses to report events for one utterance.
#[derive(Debug, Clone)]
pub struct EngineEventSink {
    token: u64,
    tx: UnboundedSender<ControllerInput>,
}

impl EngineEventSink {
    pub(crate) fn new(token: u64, tx: UnboundedSender<ControllerInput>) -> Self {
        Self { token, tx }
    }

    pub fn emit(&self, event: EngineEvent) {
        // The controller being gone just means nobody is listening anymore.
        let _ = self.tx.send(ControllerInput::Engine {
            token: self.token,
            event,
        });
    }
}

/// Handle the engine uses to announce that its voice catalog changed.
#[derive(Debug, Clone)]
pub struct VoicesChangedNotifier {
    tx: UnboundedSender<ControllerInput>,
}

impl VoicesChangedNotifier {
    pub(crate) fn new(tx: UnboundedSender<ControllerInput>) -> Self {
        Self { tx }
    }

    pub fn notify(&self) {
        let _ = self.tx.send(ControllerInput::VoicesChanged);
    }
}

/// Capabilities the controller needs from a platform speech engine.
///
/// After `cancel` returns, the engine must not emit further events for the
/// cancelled utterance. The controller drops them anyway, but engines should
/// not rely on that.
pub trait SpeechEngine: Send + Sync {
    /// Start speaking. Returns as soon as the utterance is queued; progress is
    /// reported through `events`.
    fn speak(&self, request: &PlaybackRequest, events: EngineEventSink)
        -> Result<(), EngineError>;

    fn pause(&self);

    fn resume(&self);

    fn cancel(&self);

    /// Current voice catalog. May be empty until the platform finishes loading.
    fn list_voices(&self) -> Vec<Voice>;
}
