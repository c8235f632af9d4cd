use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{GenerativeBackend, SpeechSynthesizer};
use crate::application::services::CycleOutcome;
use crate::domain::{AudioBuffer, SessionId};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct RecordResponse {
    pub transcription: String,
    pub success: bool,
}

#[derive(Serialize)]
pub struct ConverseResponse {
    pub transcription: String,
    pub response: Option<String>,
    pub audio_url: Option<String>,
    pub session_id: Uuid,
    pub timed_out: bool,
}

struct VoiceUpload {
    audio: Option<AudioBuffer>,
    session_id: Option<Uuid>,
}

async fn read_upload(mut multipart: Multipart) -> Result<VoiceUpload, String> {
    let mut upload = VoiceUpload {
        audio: None,
        session_id: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("multipart: {}", e))?
    {
        match field.name() {
            Some("audio") => {
                let filename = field.file_name().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("audio field: {}", e))?;
                upload.audio = Some(AudioBuffer::from_upload(
                    bytes.to_vec(),
                    filename.as_deref(),
                ));
            }
            Some("session_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| format!("session_id field: {}", e))?;
                upload.session_id = raw.trim().parse().ok();
            }
            _ => {}
        }
    }

    Ok(upload)
}

/// Transcription-only endpoint: an empty transcript is a success, not an
/// error; only decode failure reports one.
#[tracing::instrument(skip(state, multipart))]
pub async fn voice_record_handler<G, S>(
    State(state): State<AppState<G, S>>,
    multipart: Multipart,
) -> impl IntoResponse
where
    G: GenerativeBackend + 'static,
    S: SpeechSynthesizer + 'static,
{
    let upload = match read_upload(multipart).await {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(error = %e, "Bad voice upload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Audio file is required")),
            )
                .into_response();
        }
    };

    let Some(audio) = upload.audio else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Audio file is required")),
        )
            .into_response();
    };

    tracing::debug!(bytes = audio.bytes.len(), "Transcribing uploaded audio");

    match state.orchestrator.transcribe_upload(audio).await {
        Ok(result) => {
            let transcription = result.text().unwrap_or_default().to_string();
            (
                StatusCode::OK,
                Json(RecordResponse {
                    transcription,
                    success: true,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Audio normalization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Voice processing failed")),
            )
                .into_response()
        }
    }
}

/// Full voice cycle: transcribe, generate a reply within the session
/// context, synthesize the spoken answer.
#[tracing::instrument(skip(state, multipart))]
pub async fn voice_converse_handler<G, S>(
    State(state): State<AppState<G, S>>,
    multipart: Multipart,
) -> impl IntoResponse
where
    G: GenerativeBackend + 'static,
    S: SpeechSynthesizer + 'static,
{
    let upload = match read_upload(multipart).await {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(error = %e, "Bad voice upload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Audio file is required")),
            )
                .into_response();
        }
    };

    let Some(audio) = upload.audio else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Audio file is required")),
        )
            .into_response();
    };

    let session = upload
        .session_id
        .map(SessionId::from_uuid)
        .unwrap_or_default();

    let timeout = std::time::Duration::from_secs(state.settings.recognition.mic_timeout_secs);

    match state
        .orchestrator
        .run_cycle(session, audio, Some(timeout))
        .await
    {
        Ok(CycleOutcome::Completed {
            transcript,
            reply,
            artifact,
        }) => {
            let audio_url = artifact
                .as_ref()
                .and_then(|a| a.filename())
                .map(|name| format!("/static/audio/{}", name));
            (
                StatusCode::OK,
                Json(ConverseResponse {
                    transcription: transcript,
                    response: Some(reply),
                    audio_url,
                    session_id: session.as_uuid(),
                    timed_out: false,
                }),
            )
                .into_response()
        }
        Ok(CycleOutcome::NoSpeech) => {
            tracing::debug!(session = %session, "No speech detected in upload");
            (
                StatusCode::OK,
                Json(ConverseResponse {
                    transcription: String::new(),
                    response: None,
                    audio_url: None,
                    session_id: session.as_uuid(),
                    timed_out: false,
                }),
            )
                .into_response()
        }
        Ok(CycleOutcome::TimedOut) => {
            tracing::warn!(session = %session, "Recognition timed out");
            (
                StatusCode::OK,
                Json(ConverseResponse {
                    transcription: String::new(),
                    response: None,
                    audio_url: None,
                    session_id: session.as_uuid(),
                    timed_out: true,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Audio normalization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Voice processing failed")),
            )
                .into_response()
        }
    }
}
