//! VoiceAloud: text-to-speech playback with a simulated premium backend.
//!
//! - [`domain::playback`] holds the client-side [`SpeechController`] that
//!   arbitrates between local synthesis and premium requests.
//! - The server side records premium requests in PostgreSQL and serves
//!   `POST /api/premium-speak` and `GET /api/history`.
//!
//! [`SpeechController`]: domain::playback::SpeechController

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
