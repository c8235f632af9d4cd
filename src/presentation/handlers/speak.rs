use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerativeBackend, SpeechSynthesizer, SynthesisError};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: String,
    pub lang: Option<String>,
    pub slow: Option<bool>,
}

#[derive(Serialize)]
pub struct SpeakResponse {
    pub audio_url: String,
    pub success: bool,
}

#[tracing::instrument(skip(state, request))]
pub async fn speak_handler<G, S>(
    State(state): State<AppState<G, S>>,
    Json(request): Json<SpeakRequest>,
) -> impl IntoResponse
where
    G: GenerativeBackend + 'static,
    S: SpeechSynthesizer + 'static,
{
    let lang = request
        .lang
        .unwrap_or_else(|| state.settings.synthesis.lang.clone());
    let slow = request.slow.unwrap_or(state.settings.synthesis.slow);

    match state
        .synthesizer
        .synthesize(&request.text, &lang, slow)
        .await
    {
        Ok(artifact) => {
            let audio_url = artifact
                .filename()
                .map(|name| format!("/static/audio/{}", name))
                .unwrap_or_default();
            (
                StatusCode::OK,
                Json(SpeakResponse {
                    audio_url,
                    success: true,
                }),
            )
                .into_response()
        }
        Err(SynthesisError::EmptyInput) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Text is required")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Speech synthesis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Text-to-speech failed")),
            )
                .into_response()
        }
    }
}
