mod audio;
mod canonical_audio;
mod conversation_window;
mod dialogue_turn;
mod session_id;
mod synthesis_artifact;
mod transcript;
mod turn_role;

pub use audio::{AudioBuffer, FormatHint};
pub use canonical_audio::{
    segment_rms, CanonicalAudio, CANONICAL_BITS_PER_SAMPLE, CANONICAL_CHANNELS,
    CANONICAL_SAMPLE_RATE,
};
pub use conversation_window::{ConversationWindow, MAX_WINDOW_TURNS};
pub use dialogue_turn::DialogueTurn;
pub use session_id::SessionId;
pub use synthesis_artifact::SynthesisArtifact;
pub use transcript::{TranscriptBackend, TranscriptResult};
pub use turn_role::TurnRole;
