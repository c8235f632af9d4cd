use crate::domain::{ConversationWindow, DialogueTurn};

/// Persona instructions prepended to every prompt.
pub const DEFAULT_PREAMBLE: &str = "You are a helpful voice assistant chatbot. You provide clear, concise, and friendly responses.\nKeep your responses conversational and natural for voice interaction.";

/// How many recent turns are rendered into the prompt.
pub const PROMPT_RECENT_TURNS: usize = 10;

/// Bounded dialogue history plus prompt assembly for one session.
///
/// `build_prompt` never mutates the window; the user turn is appended before
/// the generative call and the assistant turn after it, in that order.
pub struct ConversationContext {
    window: ConversationWindow,
    preamble: String,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self {
            window: ConversationWindow::new(),
            preamble: DEFAULT_PREAMBLE.to_string(),
        }
    }

    pub fn with_preamble(preamble: impl Into<String>) -> Self {
        Self {
            window: ConversationWindow::new(),
            preamble: preamble.into(),
        }
    }

    pub fn append(&mut self, turn: DialogueTurn) {
        self.window.append(turn);
    }

    pub fn set_system(&mut self, text: impl Into<String>) {
        self.window.append(DialogueTurn::system(text));
    }

    pub fn window(&self) -> &ConversationWindow {
        &self.window
    }

    /// Fixed assembly order: preamble, pinned system turn, most recent
    /// turns oldest first, then the new user text with an assistant cue.
    pub fn build_prompt(&self, new_user_text: &str) -> String {
        let mut prompt = String::with_capacity(self.preamble.len() + 256);
        prompt.push_str(&self.preamble);
        prompt.push_str("\n\nRecent conversation:\n");

        if let Some(system) = self.window.system_turn() {
            prompt.push_str(&format!("{}: {}\n", system.role, system.text));
        }
        for turn in self.window.recent(PROMPT_RECENT_TURNS) {
            prompt.push_str(&format!("{}: {}\n", turn.role, turn.text));
        }

        prompt.push_str(&format!("User: {}\nAssistant:", new_user_text));
        prompt
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}
