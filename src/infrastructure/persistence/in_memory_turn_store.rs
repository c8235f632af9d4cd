use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{TurnStore, TurnStoreError};
use crate::domain::{DialogueTurn, SessionId};

/// Process-local turn store. Durable persistence is a collaborator concern;
/// this adapter keeps the port exercised without a database.
pub struct InMemoryTurnStore {
    turns: RwLock<HashMap<SessionId, Vec<DialogueTurn>>>,
}

impl InMemoryTurnStore {
    pub fn new() -> Self {
        Self {
            turns: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryTurnStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TurnStore for InMemoryTurnStore {
    async fn record_turn(
        &self,
        session: SessionId,
        turn: &DialogueTurn,
    ) -> Result<(), TurnStoreError> {
        let mut turns = self.turns.write().await;
        turns.entry(session).or_default().push(turn.clone());
        Ok(())
    }

    async fn session_turns(&self, session: SessionId) -> Result<Vec<DialogueTurn>, TurnStoreError> {
        let turns = self.turns.read().await;
        Ok(turns.get(&session).cloned().unwrap_or_default())
    }
}
