use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{GenerativeBackend, SpeechSynthesizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    chat_handler, health_handler, session_history_handler, speak_handler, voice_converse_handler,
    voice_record_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<G, S>(state: AppState<G, S>) -> Router
where
    G: GenerativeBackend + 'static,
    S: SpeechSynthesizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler::<G, S>))
        .route("/api/voice/record", post(voice_record_handler::<G, S>))
        .route("/api/voice/converse", post(voice_converse_handler::<G, S>))
        .route("/api/voice/speak", post(speak_handler::<G, S>))
        .route(
            "/api/sessions/{session_id}/history",
            get(session_history_handler::<G, S>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
