use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{GenerativeBackend, SpeechSynthesizer};
use crate::domain::SessionId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HistoryMessage {
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<HistoryMessage>,
    pub session_id: Uuid,
}

#[tracing::instrument(skip(state))]
pub async fn session_history_handler<G, S>(
    State(state): State<AppState<G, S>>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse
where
    G: GenerativeBackend + 'static,
    S: SpeechSynthesizer + 'static,
{
    let session = SessionId::from_uuid(session_id);
    let turns = state.orchestrator.session_history(session).await;

    let messages = turns
        .into_iter()
        .map(|turn| HistoryMessage {
            sender: turn.role.as_sender().to_string(),
            content: turn.text,
            timestamp: turn.created_at,
        })
        .collect();

    (
        StatusCode::OK,
        Json(HistoryResponse {
            messages,
            session_id,
        }),
    )
}
