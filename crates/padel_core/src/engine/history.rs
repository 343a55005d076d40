//! Bounded undo history.
//!
//! One snapshot per externally visible scoring action, taken by the caller
//! before the mutation. Capacity is fixed; the oldest snapshot is dropped
//! first, so very long matches stay bounded while still allowing many steps
//! of undo.

use crate::models::{HistoryEntry, MatchState};

/// Maximum retained snapshots. Entries evicted past this cap are
/// unrecoverable; there is no redo.
pub const HISTORY_LIMIT: usize = 50;

/// Append-only snapshot log with FIFO eviction and single-step-back undo.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current state and clock. Call before mutating.
    pub fn save(&mut self, state: &MatchState, remaining_secs: u64) {
        self.entries.push(HistoryEntry { state: state.clone(), remaining_secs });
        if self.entries.len() > HISTORY_LIMIT {
            self.entries.remove(0);
        }
    }

    /// Restore the most recent snapshot into `state` and `remaining_secs`,
    /// discarding it. Returns false (leaving both untouched) when empty.
    pub fn undo(&mut self, state: &mut MatchState, remaining_secs: &mut u64) -> bool {
        match self.entries.pop() {
            Some(entry) => {
                *state = entry.state;
                *remaining_secs = entry.remaining_secs;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest retained snapshot, if any.
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scoring::score_point;
    use crate::models::Team;

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut history = History::new();
        let mut state = MatchState::new();
        let mut remaining = 1200;

        assert!(!history.can_undo());
        assert!(!history.undo(&mut state, &mut remaining));
        assert_eq!(state, MatchState::new());
        assert_eq!(remaining, 1200);
    }

    #[test]
    fn undo_restores_the_exact_snapshot() {
        let mut history = History::new();
        let mut state = MatchState::new();
        let mut remaining = 900u64;

        let before = state.clone();
        history.save(&state, remaining);
        score_point(&mut state, Team::Player);
        remaining = 899;

        assert!(history.undo(&mut state, &mut remaining));
        assert_eq!(state, before);
        assert_eq!(remaining, 900);
        assert!(history.is_empty());
    }

    #[test]
    fn undo_steps_back_repeatedly_in_order() {
        let mut history = History::new();
        let mut state = MatchState::new();
        let mut remaining = 100u64;

        let mut snapshots = Vec::new();
        for i in 0..3 {
            snapshots.push(state.clone());
            history.save(&state, remaining - i);
            score_point(&mut state, Team::Opponent);
        }

        for expected in snapshots.iter().rev() {
            assert!(history.undo(&mut state, &mut remaining));
            assert_eq!(&state, expected);
        }
        assert!(!history.can_undo());
    }

    #[test]
    fn history_is_capped_at_fifty_most_recent() {
        let mut history = History::new();
        let state = MatchState::new();

        for i in 0..60u64 {
            history.save(&state, i);
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        // The oldest ten snapshots were evicted; entry 10 is now the oldest.
        assert_eq!(history.oldest().unwrap().remaining_secs, 10);
    }
}
