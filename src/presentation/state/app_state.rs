use std::sync::Arc;

use crate::application::ports::{GenerativeBackend, SpeechSynthesizer};
use crate::application::services::VoiceInteractionOrchestrator;
use crate::presentation::config::Settings;

pub struct AppState<G, S>
where
    G: GenerativeBackend,
    S: SpeechSynthesizer,
{
    pub orchestrator: Arc<VoiceInteractionOrchestrator<G, S>>,
    pub synthesizer: Arc<S>,
    pub settings: Settings,
}

impl<G, S> Clone for AppState<G, S>
where
    G: GenerativeBackend,
    S: SpeechSynthesizer,
{
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
            synthesizer: Arc::clone(&self.synthesizer),
            settings: self.settings.clone(),
        }
    }
}
