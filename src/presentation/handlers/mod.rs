mod chat;
mod health;
mod history;
mod speak;
mod voice;

pub use chat::chat_handler;
pub use health::health_handler;
pub use history::session_history_handler;
pub use speak::speak_handler;
pub use voice::{voice_converse_handler, voice_record_handler};

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
