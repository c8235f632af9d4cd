mod audio_normalizer;
mod generative_backend;
mod recognition_backend;
mod speech_synthesizer;
mod turn_store;

pub use audio_normalizer::{AudioNormalizer, DecodeError};
pub use generative_backend::{GenerationError, GenerativeBackend};
pub use recognition_backend::{BackendOutcome, RecognitionBackend};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use turn_store::{TurnStore, TurnStoreError};
