//! Speech capture adapters.
//!
//! A terminal has no speech recognizer, so the default adapter reports the
//! capability as unavailable and the assistant turns voice input off.

use crate::domain::DomainError;
use crate::ports::{SpeechPort, SpeechSettings};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSpeech;

#[async_trait::async_trait]
impl SpeechPort for UnsupportedSpeech {
    async fn capture(&self, settings: &SpeechSettings) -> Result<String, DomainError> {
        debug!(language = %settings.language, "speech capture requested");
        Err(DomainError::CapabilityUnavailable(format!(
            "no speech recognizer for {}",
            settings.language
        )))
    }
}
