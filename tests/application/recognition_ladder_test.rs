use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use talvik::application::ports::{BackendOutcome, RecognitionBackend};
use talvik::application::services::RecognitionLadder;
use talvik::domain::{CanonicalAudio, TranscriptBackend, TranscriptResult, CANONICAL_SAMPLE_RATE};

/// One quiet second followed by one second of loud alternating samples.
fn speechy_audio() -> CanonicalAudio {
    let rate = CANONICAL_SAMPLE_RATE as usize;
    let mut samples = vec![0i16; rate];
    samples.extend((0..rate).map(|i| if i % 2 == 0 { 8_000 } else { -8_000 }));
    CanonicalAudio::new(samples)
}

/// Loud from the very first sample, as in a push-to-talk upload.
fn immediate_speech_audio() -> CanonicalAudio {
    let rate = CANONICAL_SAMPLE_RATE as usize;
    let samples: Vec<i16> = (0..rate).map(|i| if i % 2 == 0 { 8_000 } else { -8_000 }).collect();
    CanonicalAudio::new(samples)
}

fn silent_audio() -> CanonicalAudio {
    CanonicalAudio::new(vec![0i16; 2 * CANONICAL_SAMPLE_RATE as usize])
}

struct ScriptedBackend {
    id: TranscriptBackend,
    outcome: BackendOutcome,
    calls: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    fn new(id: TranscriptBackend, outcome: BackendOutcome) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = Arc::new(Self {
            id,
            outcome,
            calls: Arc::clone(&calls),
        });
        (backend, calls)
    }
}

#[async_trait::async_trait]
impl RecognitionBackend for ScriptedBackend {
    fn id(&self) -> TranscriptBackend {
        self.id.clone()
    }

    async fn recognize(&self, _audio: &CanonicalAudio) -> BackendOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

struct SleepyBackend;

#[async_trait::async_trait]
impl RecognitionBackend for SleepyBackend {
    fn id(&self) -> TranscriptBackend {
        TranscriptBackend::Default
    }

    async fn recognize(&self, _audio: &CanonicalAudio) -> BackendOutcome {
        tokio::time::sleep(Duration::from_millis(500)).await;
        BackendOutcome::Text {
            text: "too late".to_string(),
            confidence: None,
        }
    }
}

#[tokio::test]
async fn given_first_backend_unavailable_when_second_succeeds_then_third_is_never_invoked() {
    let (a, a_calls) = ScriptedBackend::new(
        TranscriptBackend::Default,
        BackendOutcome::ServiceUnavailable("quota exceeded".to_string()),
    );
    let (b, b_calls) = ScriptedBackend::new(
        TranscriptBackend::Locale("en-US".to_string()),
        BackendOutcome::Text {
            text: "hello world".to_string(),
            confidence: Some(0.9),
        },
    );
    let (c, c_calls) = ScriptedBackend::new(
        TranscriptBackend::Locale("en-GB".to_string()),
        BackendOutcome::Text {
            text: "should not be used".to_string(),
            confidence: None,
        },
    );

    let ladder = RecognitionLadder::new(vec![a, b, c]);
    let result = ladder.transcribe(&speechy_audio()).await;

    assert_eq!(
        result,
        TranscriptResult::Text {
            text: "hello world".to_string(),
            backend: TranscriptBackend::Locale("en-US".to_string()),
            confidence: Some(0.9),
        }
    );
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    assert_eq!(c_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_speech_from_the_first_sample_when_transcribing_then_backends_still_run() {
    let (backend, calls) = ScriptedBackend::new(
        TranscriptBackend::Default,
        BackendOutcome::Text {
            text: "hello".to_string(),
            confidence: None,
        },
    );

    let ladder = RecognitionLadder::new(vec![backend]);
    let result = ladder.transcribe(&immediate_speech_audio()).await;

    assert_eq!(result.text(), Some("hello"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_silent_audio_when_transcribing_then_empty_without_calling_backends() {
    let (backend, calls) = ScriptedBackend::new(
        TranscriptBackend::Default,
        BackendOutcome::Text {
            text: "phantom".to_string(),
            confidence: None,
        },
    );

    let ladder = RecognitionLadder::new(vec![backend]);
    let result = ladder.transcribe(&silent_audio()).await;

    assert_eq!(result, TranscriptResult::Empty);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_whitespace_transcript_when_first_backend_answers_then_ladder_continues() {
    let (a, _) = ScriptedBackend::new(
        TranscriptBackend::Default,
        BackendOutcome::Text {
            text: "   ".to_string(),
            confidence: None,
        },
    );
    let (b, _) = ScriptedBackend::new(
        TranscriptBackend::Locale("en-US".to_string()),
        BackendOutcome::Text {
            text: "good morning".to_string(),
            confidence: None,
        },
    );

    let ladder = RecognitionLadder::new(vec![a, b]);
    let result = ladder.transcribe(&speechy_audio()).await;

    assert_eq!(result.text(), Some("good morning"));
}

#[tokio::test]
async fn given_every_backend_failing_when_ladder_exhausts_then_result_is_empty_not_error() {
    let (a, _) = ScriptedBackend::new(
        TranscriptBackend::Default,
        BackendOutcome::ServiceUnavailable("network down".to_string()),
    );
    let (b, _) = ScriptedBackend::new(
        TranscriptBackend::Locale("en-US".to_string()),
        BackendOutcome::NoSpeech,
    );

    let ladder = RecognitionLadder::new(vec![a, b]);
    let result = ladder.transcribe(&speechy_audio()).await;

    assert_eq!(result, TranscriptResult::Empty);
}

#[tokio::test]
async fn given_recording_timeout_when_backend_is_slow_then_result_is_timed_out() {
    let ladder = RecognitionLadder::new(vec![Arc::new(SleepyBackend)]);

    let result = ladder
        .transcribe_recording(&speechy_audio(), Duration::from_millis(50))
        .await;

    assert_eq!(result, TranscriptResult::TimedOut);
}

#[tokio::test]
async fn given_generous_timeout_when_recording_then_transcript_passes_through() {
    let (backend, _) = ScriptedBackend::new(
        TranscriptBackend::Default,
        BackendOutcome::Text {
            text: "quick answer".to_string(),
            confidence: None,
        },
    );

    let ladder = RecognitionLadder::new(vec![backend]);
    let result = ladder
        .transcribe_recording(&speechy_audio(), Duration::from_secs(5))
        .await;

    assert_eq!(result.text(), Some("quick answer"));
}
