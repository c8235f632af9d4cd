use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{BackendOutcome, RecognitionBackend};
use crate::domain::{CanonicalAudio, TranscriptBackend, CANONICAL_SAMPLE_RATE};

use super::pcm_to_wav;

const DEFAULT_BASE_URL: &str = "http://www.google.com/speech-api/v2/recognize";

/// Google-web-speech style recognition service. One instance per ladder
/// rung; the locale tag distinguishes the default rung from regional
/// variants.
pub struct HttpSpeechBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    locale: Option<String>,
}

impl HttpSpeechBackend {
    pub fn new(api_key: String, locale: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            locale,
        }
    }
}

#[async_trait]
impl RecognitionBackend for HttpSpeechBackend {
    fn id(&self) -> TranscriptBackend {
        match &self.locale {
            Some(tag) => TranscriptBackend::Locale(tag.clone()),
            None => TranscriptBackend::Default,
        }
    }

    async fn recognize(&self, audio: &CanonicalAudio) -> BackendOutcome {
        let lang = self.locale.as_deref().unwrap_or("en-US");
        let url = format!(
            "{}?output=json&lang={}&key={}",
            self.base_url, lang, self.api_key
        );

        tracing::debug!(backend = %self.id(), duration_secs = audio.duration_secs(), "Sending audio to speech API");

        let response = match self
            .client
            .post(&url)
            .header(
                "Content-Type",
                format!("audio/l16; rate={}", CANONICAL_SAMPLE_RATE),
            )
            .body(pcm_to_wav(audio))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return BackendOutcome::ServiceUnavailable(format!("request: {}", e)),
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return BackendOutcome::ServiceUnavailable(format!("status {}: {}", status, body));
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => return BackendOutcome::ServiceUnavailable(format!("body: {}", e)),
        };

        parse_response_lines(&body)
    }
}

/// The service answers with one JSON object per line; the first line with a
/// populated `result` array carries the alternatives.
fn parse_response_lines(body: &str) -> BackendOutcome {
    let mut saw_result_field = false;

    for line in body.lines().filter(|l| !l.trim().is_empty()) {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                return BackendOutcome::ServiceUnavailable(format!("malformed response: {}", e));
            }
        };

        let Some(results) = value.get("result").and_then(|r| r.as_array()) else {
            continue;
        };
        saw_result_field = true;

        let Some(alternative) = results
            .iter()
            .filter_map(|r| r.get("alternative").and_then(|a| a.as_array()))
            .flatten()
            .next()
        else {
            continue;
        };

        let confidence = alternative
            .get("confidence")
            .and_then(|c| c.as_f64())
            .map(|c| c as f32);

        match alternative.get("transcript") {
            Some(Value::String(text)) => {
                return BackendOutcome::Text {
                    text: text.clone(),
                    confidence,
                };
            }
            // Some service variants hand back bare scalars; coerce the ones
            // a string can represent and reject the rest.
            Some(Value::Number(n)) => {
                return BackendOutcome::Text {
                    text: n.to_string(),
                    confidence,
                };
            }
            Some(Value::Bool(b)) => {
                return BackendOutcome::Text {
                    text: b.to_string(),
                    confidence,
                };
            }
            Some(other) => {
                return BackendOutcome::ServiceUnavailable(format!(
                    "transcript not representable as string: {}",
                    other
                ));
            }
            None => continue,
        }
    }

    if saw_result_field {
        BackendOutcome::NoSpeech
    } else {
        BackendOutcome::ServiceUnavailable("response carried no result field".to_string())
    }
}
