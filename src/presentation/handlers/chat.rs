use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{GenerativeBackend, SpeechSynthesizer};
use crate::domain::SessionId;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    pub session_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<G, S>(
    State(state): State<AppState<G, S>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    G: GenerativeBackend + 'static,
    S: SpeechSynthesizer + 'static,
{
    if request.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Message is required")),
        )
            .into_response();
    }

    let session = request
        .session_id
        .map(SessionId::from_uuid)
        .unwrap_or_default();

    tracing::debug!(
        session = %session,
        message = %sanitize_prompt(&request.message),
        "Processing chat message"
    );

    let reply = state
        .orchestrator
        .handle_text(session, request.message.trim())
        .await;

    (
        StatusCode::OK,
        Json(ChatResponse {
            response: reply,
            session_id: session.as_uuid(),
            timestamp: Utc::now(),
        }),
    )
        .into_response()
}
