use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::SynthesisArtifact;

const DEFAULT_BASE_URL: &str = "https://translate.google.com/translate_tts";

/// Tie-breaker for calls landing on the same timestamp tick.
static ARTIFACT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Timestamp-derived output name with sub-second precision; the sequence
/// suffix guarantees concurrent calls never collide.
pub fn unique_artifact_name() -> String {
    let stamp = Utc::now().format("%Y%m%d_%H%M%S_%f");
    let seq = ARTIFACT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("tts_output_{}_{}.mp3", stamp, seq)
}

/// Fetches compressed speech audio from a Google-Translate style TTS
/// endpoint and writes it under the configured output directory.
pub struct HttpTtsSynthesizer {
    client: reqwest::Client,
    base_url: String,
    output_dir: PathBuf,
}

impl HttpTtsSynthesizer {
    pub fn new(output_dir: PathBuf, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            output_dir,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpTtsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        slow: bool,
    ) -> Result<SynthesisArtifact, SynthesisError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::warn!("Blank text provided for synthesis");
            return Err(SynthesisError::EmptyInput);
        }

        let speed = if slow { "0.24" } else { "1" };
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("ttsspeed", speed),
                ("q", trimmed),
            ])
            .send()
            .await
            .map_err(|e| SynthesisError::WriteFailure(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(SynthesisError::WriteFailure(format!(
                "status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::WriteFailure(format!("body: {}", e)))?
            .to_vec();

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| SynthesisError::WriteFailure(format!("create dir: {}", e)))?;

        let path = self.output_dir.join(unique_artifact_name());
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| SynthesisError::WriteFailure(format!("write: {}", e)))?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Generated TTS audio");
        Ok(SynthesisArtifact::new(path, bytes))
    }
}
