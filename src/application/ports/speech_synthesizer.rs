use async_trait::async_trait;

use crate::domain::SynthesisArtifact;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        slow: bool,
    ) -> Result<SynthesisArtifact, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("empty input")]
    EmptyInput,
    #[error("write failed: {0}")]
    WriteFailure(String),
}
