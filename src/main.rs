use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use talvik::application::services::{EnergyGateSettings, VoiceInteractionOrchestrator};
use talvik::infrastructure::audio::{build_recognition_ladder, SymphoniaNormalizer};
use talvik::infrastructure::generation::GeminiClient;
use talvik::infrastructure::observability::init_tracing;
use talvik::infrastructure::persistence::InMemoryTurnStore;
use talvik::infrastructure::synthesis::HttpTtsSynthesizer;
use talvik::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_tracing(&settings.logging.level, settings.logging.json);

    let gate = EnergyGateSettings {
        energy_floor: settings.recognition.energy_floor,
    };
    let ladder = Arc::new(build_recognition_ladder(
        &settings.recognition.api_key,
        &settings.recognition.locales,
        None,
        gate,
    ));

    let backend = Arc::new(GeminiClient::new(
        settings.generation.api_key.clone(),
        settings.generation.model.clone(),
        None,
        settings.generation.max_output_tokens,
        settings.generation.temperature,
    ));

    let synthesizer = Arc::new(HttpTtsSynthesizer::new(
        PathBuf::from(&settings.synthesis.output_dir),
        None,
    ));

    let orchestrator = Arc::new(VoiceInteractionOrchestrator::new(
        Arc::new(SymphoniaNormalizer),
        ladder,
        backend,
        Arc::clone(&synthesizer),
        Arc::new(InMemoryTurnStore::new()),
        settings.synthesis.lang.clone(),
        settings.synthesis.slow,
    ));

    let state = AppState {
        orchestrator,
        synthesizer,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Voice chat backend listening");

    axum::serve(listener, router).await?;

    Ok(())
}
