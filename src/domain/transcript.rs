use std::fmt;

/// Which rung of the recognition ladder produced a transcript.
///
/// The ladder order is configuration data, so regional variants carry their
/// locale tag rather than forming a closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptBackend {
    Default,
    Locale(String),
}

impl fmt::Display for TranscriptBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptBackend::Default => write!(f, "default"),
            TranscriptBackend::Locale(tag) => write!(f, "{}", tag),
        }
    }
}

/// Aggregate outcome of one run of the recognition ladder.
///
/// `Empty` is a normal result (silent recording, nothing understood), not a
/// failure. `TimedOut` only occurs on the microphone-sourced path.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptResult {
    Text {
        text: String,
        backend: TranscriptBackend,
        confidence: Option<f32>,
    },
    Empty,
    TimedOut,
}

impl TranscriptResult {
    pub fn text(&self) -> Option<&str> {
        match self {
            TranscriptResult::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TranscriptResult::Empty)
    }
}
