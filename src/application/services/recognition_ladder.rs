use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{BackendOutcome, RecognitionBackend};
use crate::domain::{segment_rms, CanonicalAudio, TranscriptResult};

/// Absolute energy floor below which a buffer is treated as silence. The
/// floor only filters out all-quiet uploads; deciding whether audible audio
/// actually contains speech is left to the backends.
#[derive(Debug, Clone)]
pub struct EnergyGateSettings {
    pub energy_floor: f32,
}

impl Default for EnergyGateSettings {
    fn default() -> Self {
        Self { energy_floor: 0.01 }
    }
}

/// Ordered speech-to-text fallback: backends are tried in configuration
/// order and the first non-empty transcript wins. The ordering is policy,
/// so it lives here as data rather than in the adapters.
pub struct RecognitionLadder {
    backends: Vec<Arc<dyn RecognitionBackend>>,
    gate: EnergyGateSettings,
}

impl RecognitionLadder {
    pub fn new(backends: Vec<Arc<dyn RecognitionBackend>>) -> Self {
        Self {
            backends,
            gate: EnergyGateSettings::default(),
        }
    }

    pub fn with_energy_gate(mut self, gate: EnergyGateSettings) -> Self {
        self.gate = gate;
        self
    }

    /// File-sourced transcription. Exhausting every backend is a normal
    /// outcome (`Empty`), never an error.
    pub async fn transcribe(&self, audio: &CanonicalAudio) -> TranscriptResult {
        if !self.contains_speech_energy(audio) {
            tracing::debug!(
                energy_floor = self.gate.energy_floor,
                duration_secs = audio.duration_secs(),
                "No frame above energy floor, skipping backends"
            );
            return TranscriptResult::Empty;
        }

        for backend in &self.backends {
            match backend.recognize(audio).await {
                BackendOutcome::Text { text, confidence } => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        tracing::debug!(backend = %backend.id(), "Backend returned blank text");
                        continue;
                    }
                    tracing::info!(
                        backend = %backend.id(),
                        chars = trimmed.len(),
                        "Transcription succeeded"
                    );
                    return TranscriptResult::Text {
                        text: trimmed.to_string(),
                        backend: backend.id(),
                        confidence,
                    };
                }
                BackendOutcome::NoSpeech => {
                    tracing::debug!(backend = %backend.id(), "Backend detected no speech");
                }
                BackendOutcome::ServiceUnavailable(reason) => {
                    tracing::warn!(
                        backend = %backend.id(),
                        reason = %reason,
                        "Backend unavailable, trying next"
                    );
                }
            }
        }

        tracing::info!("All recognition backends exhausted without a transcript");
        TranscriptResult::Empty
    }

    /// Microphone-sourced transcription enforces a caller-supplied timeout;
    /// expiry is a distinct outcome from an empty transcript.
    pub async fn transcribe_recording(
        &self,
        audio: &CanonicalAudio,
        timeout: Duration,
    ) -> TranscriptResult {
        match tokio::time::timeout(timeout, self.transcribe(audio)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout_secs = timeout.as_secs_f32(), "Recognition timed out");
                TranscriptResult::TimedOut
            }
        }
    }

    /// Scans every 10ms frame for one above the floor. The scan covers the
    /// whole buffer so an utterance starting at sample zero still passes.
    fn contains_speech_energy(&self, audio: &CanonicalAudio) -> bool {
        const FRAME_SAMPLES: usize = 160; // 10ms at 16 kHz

        audio
            .samples()
            .chunks(FRAME_SAMPLES)
            .any(|frame| segment_rms(frame) >= self.gate.energy_floor)
    }
}
