use super::{DialogueTurn, TurnRole};

/// Hard cap on retained turns: 10 user/assistant exchanges.
pub const MAX_WINDOW_TURNS: usize = 20;

/// Bounded, ordered dialogue history.
///
/// Turns are appended in arrival order. Once the cap is reached the oldest
/// non-pinned turn is evicted per append (strict FIFO). At most one System
/// turn is held; it is pinned at the front, counts toward the cap and is
/// never evicted. Appending a second System turn replaces the first.
#[derive(Debug, Clone, Default)]
pub struct ConversationWindow {
    turns: Vec<DialogueTurn>,
}

impl ConversationWindow {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    pub fn append(&mut self, turn: DialogueTurn) {
        if turn.role == TurnRole::System {
            if let Some(pos) = self.pinned_index() {
                self.turns[pos] = turn;
            } else {
                self.turns.insert(0, turn);
            }
        } else {
            self.turns.push(turn);
        }

        while self.turns.len() > MAX_WINDOW_TURNS {
            match self.oldest_evictable_index() {
                Some(pos) => {
                    self.turns.remove(pos);
                }
                None => break,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn system_turn(&self) -> Option<&DialogueTurn> {
        self.pinned_index().map(|pos| &self.turns[pos])
    }

    /// The most recent `count` non-pinned turns, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &DialogueTurn> {
        let unpinned: Vec<&DialogueTurn> = self
            .turns
            .iter()
            .filter(|t| t.role != TurnRole::System)
            .collect();
        let skip = unpinned.len().saturating_sub(count);
        unpinned.into_iter().skip(skip)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DialogueTurn> {
        self.turns.iter()
    }

    fn pinned_index(&self) -> Option<usize> {
        self.turns.iter().position(|t| t.role == TurnRole::System)
    }

    fn oldest_evictable_index(&self) -> Option<usize> {
        self.turns.iter().position(|t| t.role != TurnRole::System)
    }
}
