use super::engine::{EngineEvent, EngineEventSink, SpeechEngine, Voice, VoicesChangedNotifier};
use super::error::{PlaybackError, REMOTE_UNAVAILABLE_REASON};
use super::remote::{PremiumSpeechClient, RemoteError};
use super::request::PlaybackRequest;
use super::state::{PlaybackSnapshot, PlaybackState};
use crate::domain::speech::{PremiumSpeakRequest, PremiumSpeakResponse};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, mpsc};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_SPEAKING: &str = "Speaking (Browser)";
pub const STATUS_PAUSED: &str = "Paused (Browser)";
pub const STATUS_FINISHED: &str = "Finished (Browser)";
pub const STATUS_STOPPED: &str = "Stopped";
pub const STATUS_ERROR: &str = "Error";
pub const STATUS_CONNECTING: &str = "Connecting to backend...";
pub const STATUS_REMOTE_SUCCESS: &str = "Backend simulation successful";
pub const STATUS_REMOTE_ERROR: &str = "Error connecting to backend";
pub const STATUS_READING_FILE: &str = "Reading file...";
pub const STATUS_FILE_LOADED: &str = "File loaded";
pub const STATUS_FILE_ERROR: &str = "Error reading file";

const SNAPSHOT_CHANNEL_CAPACITY: usize = 32;

/// Notifications queued for the controller, each tagged with the operation it
/// belongs to.
#[derive(Debug)]
pub(crate) enum ControllerInput {
    Engine {
        token: u64,
        event: EngineEvent,
    },
    Remote {
        token: u64,
        outcome: Result<PremiumSpeakResponse, RemoteError>,
    },
    VoicesChanged,
}

/// Single authority over speech playback.
///
/// Local synthesis and the premium request are mutually exclusive; the state
/// machine enforces it, so the controller takes `&mut self` and is meant to be
/// owned by one task. Engine callbacks and remote completions are queued and
/// applied by [`SpeechController::process_pending`] or
/// [`SpeechController::next_event`].
pub struct SpeechController {
    engine: Arc<dyn SpeechEngine>,
    premium: Arc<dyn PremiumSpeechClient>,
    state: PlaybackState,
    status: String,
    message: Option<String>,
    voices: Vec<Voice>,
    selected_voice: Option<String>,
    file_name: Option<String>,
    loaded_text: Option<String>,
    // Token of the operation whose notifications are still accepted.
    active_token: u64,
    next_token: u64,
    input_tx: mpsc::UnboundedSender<ControllerInput>,
    input_rx: mpsc::UnboundedReceiver<ControllerInput>,
    snapshots: broadcast::Sender<PlaybackSnapshot>,
}

impl SpeechController {
    pub fn new(engine: Arc<dyn SpeechEngine>, premium: Arc<dyn PremiumSpeechClient>) -> Self {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (snapshots, _) = broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY);

        let mut controller = Self {
            engine,
            premium,
            state: PlaybackState::Idle,
            status: STATUS_READY.to_string(),
            message: None,
            voices: Vec::new(),
            selected_voice: None,
            file_name: None,
            loaded_text: None,
            active_token: 0,
            next_token: 0,
            input_tx,
            input_rx,
            snapshots,
        };
        controller.load_voices();
        controller
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn selected_voice(&self) -> Option<&str> {
        self.selected_voice.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Text of the last successfully read file.
    pub fn loaded_text(&self) -> Option<&str> {
        self.loaded_text.as_deref()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            state: self.state.clone(),
            status: self.status.clone(),
            message: self.message.clone(),
            selected_voice: self.selected_voice.clone(),
            file_name: self.file_name.clone(),
        }
    }

    /// Receive a snapshot after every state or status change.
    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackSnapshot> {
        self.snapshots.subscribe()
    }

    /// Handle for the engine adapter to signal a catalog update.
    pub fn voices_changed_notifier(&self) -> VoicesChangedNotifier {
        VoicesChangedNotifier::new(self.input_tx.clone())
    }

    /// Speak through the local engine. Completion arrives later as an engine event.
    pub fn submit_local(&mut self, request: &PlaybackRequest) -> Result<(), PlaybackError> {
        self.guard_submission(request)?;

        let token = self.begin_operation();
        self.message = None;
        self.transition(PlaybackState::Speaking, STATUS_SPEAKING);

        tracing::info!(
            token,
            voice = %request.voice_id(),
            rate = request.rate(),
            pitch = request.pitch(),
            text_length = request.text().len(),
            "Starting local speech"
        );

        let sink = EngineEventSink::new(token, self.input_tx.clone());
        if let Err(err) = self.engine.speak(request, sink) {
            tracing::warn!(token, error = %err, "Speech engine refused utterance");
            self.active_token = 0;
            self.transition(PlaybackState::Error(err.to_string()), STATUS_ERROR);
            return Err(PlaybackError::EngineError(err));
        }

        Ok(())
    }

    /// Send the request to the premium endpoint. Returns once the call is spawned;
    /// the outcome is applied when it arrives. Outside a tokio runtime nothing
    /// changes and `RemoteUnavailable` is returned.
    pub fn submit_remote(&mut self, request: &PlaybackRequest) -> Result<(), PlaybackError> {
        self.guard_submission(request)?;

        let runtime = Handle::try_current().map_err(|err| {
            tracing::warn!(error = %err, "No async runtime for premium request");
            PlaybackError::RemoteUnavailable(RemoteError::Network(err.to_string()))
        })?;

        // Flush anything the platform still has queued.
        self.engine.cancel();

        let token = self.begin_operation();
        self.message = None;
        self.transition(PlaybackState::RemoteLoading, STATUS_CONNECTING);

        let wire = PremiumSpeakRequest::from(request);
        let premium = self.premium.clone();
        let tx = self.input_tx.clone();

        tracing::info!(
            token,
            voice = %wire.voice.as_deref().unwrap_or("default"),
            "Submitting premium request"
        );

        runtime.spawn(async move {
            let outcome = premium.premium_speak(&wire).await;
            let _ = tx.send(ControllerInput::Remote { token, outcome });
        });

        Ok(())
    }

    pub fn pause(&mut self) {
        if !self.state.can_pause() {
            tracing::debug!(state = %self.state, "Ignoring pause");
            return;
        }
        self.engine.pause();
        self.transition(PlaybackState::Paused, STATUS_PAUSED);
    }

    pub fn resume(&mut self) {
        if !self.state.can_resume() {
            tracing::debug!(state = %self.state, "Ignoring resume");
            return;
        }
        self.engine.resume();
        self.transition(PlaybackState::Speaking, STATUS_SPEAKING);
    }

    /// Stop whatever is active. An in-flight premium call keeps running on the
    /// server; only its result is ignored.
    pub fn stop(&mut self) {
        match self.state {
            PlaybackState::Speaking | PlaybackState::Paused => {
                self.active_token = 0;
                self.engine.cancel();
                self.transition(PlaybackState::Idle, STATUS_STOPPED);
            }
            PlaybackState::RemoteLoading => {
                tracing::info!("Abandoning in-flight premium request");
                self.active_token = 0;
                self.transition(PlaybackState::Idle, STATUS_STOPPED);
            }
            _ => tracing::debug!(state = %self.state, "Ignoring stop"),
        }
    }

    /// The user edited the text: stop local speech and clear finished results.
    pub fn text_changed(&mut self) {
        match self.state {
            PlaybackState::Speaking | PlaybackState::Paused => self.stop(),
            PlaybackState::Finished | PlaybackState::Error(_) => {
                self.transition(PlaybackState::Idle, STATUS_READY)
            }
            _ => {}
        }
        if self.message.take().is_some() {
            self.publish();
        }
    }

    /// A text file was picked and is being read.
    pub fn file_loading(&mut self, file_name: &str) {
        tracing::debug!(file_name, "Reading text file");
        self.file_name = Some(file_name.to_string());
        self.set_status(STATUS_READING_FILE);
    }

    /// The picked file was read. Finished or failed results are cleared like a
    /// text edit; active playback keeps running.
    pub fn file_loaded(&mut self, text: String) {
        tracing::debug!(text_length = text.len(), "Text file loaded");
        self.loaded_text = Some(text);
        self.message = None;
        match self.state {
            PlaybackState::Finished | PlaybackState::Error(_) => {
                self.transition(PlaybackState::Idle, STATUS_FILE_LOADED)
            }
            _ => self.set_status(STATUS_FILE_LOADED),
        }
    }

    /// Reading the picked file failed. Playback is untouched.
    pub fn file_failed(&mut self, reason: &str) {
        tracing::warn!(reason, file_name = ?self.file_name, "Failed to read text file");
        self.set_status(STATUS_FILE_ERROR);
    }

    /// Refresh the voice catalog and pick a default if nothing usable is selected.
    pub fn load_voices(&mut self) {
        self.voices = self.engine.list_voices();

        let still_present = self
            .selected_voice
            .as_ref()
            .is_some_and(|id| self.voices.iter().any(|v| &v.id == id));

        if !still_present {
            self.selected_voice = self
                .voices
                .iter()
                .find(|v| v.is_default)
                .or_else(|| self.voices.first())
                .map(|v| v.id.clone());
        }

        tracing::debug!(
            voice_count = self.voices.len(),
            selected = ?self.selected_voice,
            "Voice catalog loaded"
        );
        self.publish();
    }

    pub fn select_voice(&mut self, voice_id: &str) -> Result<(), PlaybackError> {
        if !self.voices.iter().any(|v| v.id == voice_id) {
            return Err(PlaybackError::InvalidInput(format!(
                "Unknown voice: {}",
                voice_id
            )));
        }
        self.selected_voice = Some(voice_id.to_string());
        self.publish();
        Ok(())
    }

    /// Apply every queued notification without waiting. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(input) = self.input_rx.try_recv() {
            self.apply(input);
            applied += 1;
        }
        applied
    }

    /// Wait for the next notification and apply it.
    pub async fn next_event(&mut self) -> &PlaybackState {
        // The controller holds a sender itself, so the channel never closes.
        if let Some(input) = self.input_rx.recv().await {
            self.apply(input);
        }
        &self.state
    }

    fn guard_submission(&self, request: &PlaybackRequest) -> Result<(), PlaybackError> {
        if request.text().trim().is_empty() {
            return Err(PlaybackError::InvalidInput(
                "Text cannot be empty".to_string(),
            ));
        }
        if self.state.is_active() {
            tracing::debug!(state = %self.state, "Rejecting submission while active");
            return Err(PlaybackError::AlreadyActive);
        }
        Ok(())
    }

    fn begin_operation(&mut self) -> u64 {
        self.next_token += 1;
        self.active_token = self.next_token;
        self.active_token
    }

    fn apply(&mut self, input: ControllerInput) {
        match input {
            ControllerInput::VoicesChanged => self.load_voices(),
            ControllerInput::Engine { token, event } => {
                if token != self.active_token {
                    tracing::debug!(token, ?event, "Dropping stale engine event");
                    return;
                }
                self.apply_engine_event(event);
            }
            ControllerInput::Remote { token, outcome } => {
                if token != self.active_token || self.state != PlaybackState::RemoteLoading {
                    tracing::debug!(token, "Dropping abandoned premium response");
                    return;
                }
                self.active_token = 0;
                self.apply_remote_outcome(outcome);
            }
        }
    }

    fn apply_engine_event(&mut self, event: EngineEvent) {
        let current = self.state.clone();
        match (current, event) {
            (PlaybackState::Speaking, EngineEvent::Start) => {
                self.transition(PlaybackState::Speaking, STATUS_SPEAKING)
            }
            (PlaybackState::Speaking, EngineEvent::Pause) => {
                self.transition(PlaybackState::Paused, STATUS_PAUSED)
            }
            (PlaybackState::Paused, EngineEvent::Resume) => {
                self.transition(PlaybackState::Speaking, STATUS_SPEAKING)
            }
            (PlaybackState::Speaking | PlaybackState::Paused, EngineEvent::End) => {
                self.active_token = 0;
                self.transition(PlaybackState::Finished, STATUS_FINISHED);
            }
            (PlaybackState::Speaking | PlaybackState::Paused, EngineEvent::Error(reason)) => {
                tracing::warn!(reason = %reason, "Speech synthesis error");
                self.active_token = 0;
                self.transition(PlaybackState::Error(reason), STATUS_ERROR);
            }
            (state, event) => {
                tracing::debug!(state = %state, ?event, "Engine event has no effect");
            }
        }
    }

    fn apply_remote_outcome(&mut self, outcome: Result<PremiumSpeakResponse, RemoteError>) {
        match outcome {
            Ok(response) => {
                tracing::info!(saved_id = ?response.saved_id, "Premium request succeeded");
                self.message = Some(format!(
                    "{} (Fake URL: {})",
                    response.message, response.audio_url
                ));
                self.transition(PlaybackState::Finished, STATUS_REMOTE_SUCCESS);
            }
            Err(err) => {
                let err = PlaybackError::from(err);
                tracing::warn!(error = ?err, "Premium request failed");
                self.message = Some(format!("Error: {}. Is it running?", err));
                self.transition(
                    PlaybackState::Error(REMOTE_UNAVAILABLE_REASON.to_string()),
                    STATUS_REMOTE_ERROR,
                );
            }
        }
    }

    fn transition(&mut self, state: PlaybackState, status: &str) {
        if self.state != state {
            tracing::debug!(from = %self.state, to = %state, "Playback transition");
        }
        self.state = state;
        self.status = status.to_string();
        self.publish();
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.publish();
    }

    fn publish(&self) {
        // No subscribers is fine.
        let _ = self.snapshots.send(self.snapshot());
    }
}
