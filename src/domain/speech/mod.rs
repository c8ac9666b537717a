pub mod dto;
pub mod error;
pub mod service;

pub use dto::{PremiumSpeakRequest, PremiumSpeakResponse};
pub use error::SpeechServiceError;
pub use service::{PremiumSpeechService, PremiumSpeechServiceApi};
