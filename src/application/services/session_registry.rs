use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::SessionId;

use super::ConversationContext;

/// Per-session conversation contexts. Each context sits behind its own
/// mutex so appends within one session are serialized while different
/// sessions proceed fully in parallel.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, Arc<Mutex<ConversationContext>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub async fn context(&self, session: SessionId) -> Arc<Mutex<ConversationContext>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(session)
            .or_insert_with(|| Arc::new(Mutex::new(ConversationContext::new())))
            .clone()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
