//! Client-side speech playback.
//!
//! [`SpeechController`] arbitrates between the platform speech engine and the
//! premium endpoint, and is the only owner of the [`PlaybackState`].

pub mod controller;
pub mod engine;
pub mod error;
pub mod remote;
pub mod request;
pub mod state;

pub use controller::SpeechController;
pub use engine::{
    EngineError, EngineEvent, EngineEventSink, SpeechEngine, Voice, VoicesChangedNotifier,
};
pub use error::PlaybackError;
pub use remote::{PremiumSpeechClient, RemoteError};
pub use request::{clamp_speech_param, PlaybackRequest};
pub use state::{PlaybackSnapshot, PlaybackState};
