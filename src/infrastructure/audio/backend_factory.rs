use std::sync::Arc;

use crate::application::ports::RecognitionBackend;
use crate::application::services::{EnergyGateSettings, RecognitionLadder};

use super::HttpSpeechBackend;

/// Builds the ordered ladder from the configured locale list: a
/// default-locale rung first, then one rung per regional variant.
pub fn build_recognition_ladder(
    api_key: &str,
    locales: &[String],
    base_url: Option<&str>,
    gate: EnergyGateSettings,
) -> RecognitionLadder {
    let mut backends: Vec<Arc<dyn RecognitionBackend>> = vec![Arc::new(HttpSpeechBackend::new(
        api_key.to_string(),
        None,
        base_url.map(String::from),
    ))];

    for locale in locales {
        backends.push(Arc::new(HttpSpeechBackend::new(
            api_key.to_string(),
            Some(locale.clone()),
            base_url.map(String::from),
        )));
    }

    tracing::info!(rungs = backends.len(), "Recognition ladder configured");
    RecognitionLadder::new(backends).with_energy_gate(gate)
}
