mod http_tts_synthesizer;

pub use http_tts_synthesizer::{unique_artifact_name, HttpTtsSynthesizer};
