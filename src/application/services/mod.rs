mod conversation_context;
mod recognition_ladder;
mod response_engine;
mod session_registry;
mod voice_interaction;

pub use conversation_context::{ConversationContext, DEFAULT_PREAMBLE, PROMPT_RECENT_TURNS};
pub use recognition_ladder::{EnergyGateSettings, RecognitionLadder};
pub use response_engine::{ResponseEngine, FALLBACK_REPLY};
pub use session_registry::SessionRegistry;
pub use voice_interaction::{CycleOutcome, VoiceInteractionOrchestrator};
