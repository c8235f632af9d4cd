use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    AudioNormalizer, DecodeError, GenerativeBackend, SpeechSynthesizer, TurnStore,
};
use crate::domain::{AudioBuffer, DialogueTurn, SessionId, SynthesisArtifact, TranscriptResult};

use super::{RecognitionLadder, ResponseEngine, SessionRegistry};

/// Terminal state of one voice interaction cycle. Decode failures surface
/// as `DecodeError` from `run_cycle`; everything past recognition is
/// absorbed, so `Completed` is always reached once a transcript exists.
#[derive(Debug)]
pub enum CycleOutcome {
    NoSpeech,
    TimedOut,
    Completed {
        transcript: String,
        reply: String,
        artifact: Option<SynthesisArtifact>,
    },
}

/// Composes normalizer, recognition ladder, conversation context, response
/// engine and synthesizer for one request-response cycle per call.
pub struct VoiceInteractionOrchestrator<G, S>
where
    G: GenerativeBackend,
    S: SpeechSynthesizer,
{
    normalizer: Arc<dyn AudioNormalizer>,
    ladder: Arc<RecognitionLadder>,
    engine: ResponseEngine<G>,
    synthesizer: Arc<S>,
    sessions: SessionRegistry,
    turn_store: Arc<dyn TurnStore>,
    synthesis_lang: String,
    synthesis_slow: bool,
}

impl<G, S> VoiceInteractionOrchestrator<G, S>
where
    G: GenerativeBackend,
    S: SpeechSynthesizer,
{
    pub fn new(
        normalizer: Arc<dyn AudioNormalizer>,
        ladder: Arc<RecognitionLadder>,
        backend: Arc<G>,
        synthesizer: Arc<S>,
        turn_store: Arc<dyn TurnStore>,
        synthesis_lang: String,
        synthesis_slow: bool,
    ) -> Self {
        Self {
            normalizer,
            ladder,
            engine: ResponseEngine::new(backend),
            synthesizer,
            sessions: SessionRegistry::new(),
            turn_store,
            synthesis_lang,
            synthesis_slow,
        }
    }

    /// One full cycle: normalize, recognize, respond, synthesize. A timeout
    /// is applied only when the caller marks the audio as a live recording.
    pub async fn run_cycle(
        &self,
        session: SessionId,
        audio: AudioBuffer,
        recording_timeout: Option<Duration>,
    ) -> Result<CycleOutcome, DecodeError> {
        let canonical = self.normalizer.normalize(&audio)?;
        drop(audio);

        let transcript = match recording_timeout {
            Some(timeout) => self.ladder.transcribe_recording(&canonical, timeout).await,
            None => self.ladder.transcribe(&canonical).await,
        };
        drop(canonical);

        let text = match transcript {
            TranscriptResult::Text { text, .. } => text,
            TranscriptResult::Empty => return Ok(CycleOutcome::NoSpeech),
            TranscriptResult::TimedOut => return Ok(CycleOutcome::TimedOut),
        };

        let reply = self.exchange(session, &text).await;

        let artifact = match self
            .synthesizer
            .synthesize(&reply, &self.synthesis_lang, self.synthesis_slow)
            .await
        {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                tracing::error!(error = %e, "Speech synthesis failed, returning text-only reply");
                None
            }
        };

        Ok(CycleOutcome::Completed {
            transcript: text,
            reply,
            artifact,
        })
    }

    /// Text chat path: same context discipline without audio stages.
    pub async fn handle_text(&self, session: SessionId, message: &str) -> String {
        self.exchange(session, message).await
    }

    /// Bare transcription without touching any conversation window.
    pub async fn transcribe_upload(
        &self,
        audio: AudioBuffer,
    ) -> Result<TranscriptResult, DecodeError> {
        let canonical = self.normalizer.normalize(&audio)?;
        Ok(self.ladder.transcribe(&canonical).await)
    }

    pub async fn session_history(&self, session: SessionId) -> Vec<DialogueTurn> {
        match self.turn_store.session_turns(session).await {
            Ok(turns) => turns,
            Err(e) => {
                tracing::warn!(error = %e, session = %session, "Turn store lookup failed");
                Vec::new()
            }
        }
    }

    /// Append user turn, build prompt, generate, append assistant turn.
    /// The context mutex is held across the whole exchange so concurrent
    /// requests for the same session never interleave appends.
    async fn exchange(&self, session: SessionId, user_text: &str) -> String {
        let context = self.sessions.context(session).await;
        let mut context = context.lock().await;

        let prompt = context.build_prompt(user_text);

        let user_turn = DialogueTurn::user(user_text);
        context.append(user_turn.clone());
        self.record(session, &user_turn).await;

        let reply = self.engine.respond(&prompt).await;

        let assistant_turn = DialogueTurn::assistant(reply.clone());
        context.append(assistant_turn.clone());
        self.record(session, &assistant_turn).await;

        reply
    }

    async fn record(&self, session: SessionId, turn: &DialogueTurn) {
        if let Err(e) = self.turn_store.record_turn(session, turn).await {
            tracing::warn!(error = %e, session = %session, "Failed to record dialogue turn");
        }
    }
}
