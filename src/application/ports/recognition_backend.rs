use async_trait::async_trait;

use crate::domain::{CanonicalAudio, TranscriptBackend};

/// Per-backend result. The three cases must stay distinguishable: `NoSpeech`
/// and `ServiceUnavailable` both send the ladder to the next rung, but only
/// the former means the audio itself carried nothing usable.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendOutcome {
    Text {
        text: String,
        confidence: Option<f32>,
    },
    NoSpeech,
    ServiceUnavailable(String),
}

/// One rung of the recognition ladder: canonical PCM in, tagged outcome out.
#[async_trait]
pub trait RecognitionBackend: Send + Sync {
    fn id(&self) -> TranscriptBackend;

    async fn recognize(&self, audio: &CanonicalAudio) -> BackendOutcome;
}
