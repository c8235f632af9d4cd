use async_trait::async_trait;

use crate::domain::{DialogueTurn, SessionId};

/// Durable record of dialogue turns, keyed by session. The core only writes
/// through this port; retention is the collaborator's concern.
#[async_trait]
pub trait TurnStore: Send + Sync {
    async fn record_turn(
        &self,
        session: SessionId,
        turn: &DialogueTurn,
    ) -> Result<(), TurnStoreError>;

    async fn session_turns(&self, session: SessionId) -> Result<Vec<DialogueTurn>, TurnStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TurnStoreError {
    #[error("store failed: {0}")]
    StoreFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
}
