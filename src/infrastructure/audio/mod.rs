mod audio_normalizer;
mod backend_factory;
mod http_speech_backend;
mod wav;

pub use audio_normalizer::SymphoniaNormalizer;
pub use backend_factory::build_recognition_ladder;
pub use http_speech_backend::HttpSpeechBackend;
pub use wav::pcm_to_wav;
