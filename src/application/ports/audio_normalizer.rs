use crate::domain::{AudioBuffer, CanonicalAudio};

/// Decodes an arbitrary uploaded container/codec into canonical PCM
/// (16 kHz, mono, 16-bit signed).
pub trait AudioNormalizer: Send + Sync {
    fn normalize(&self, raw: &AudioBuffer) -> Result<CanonicalAudio, DecodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("corrupt audio data: {0}")]
    CorruptData(String),
}
