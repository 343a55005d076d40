//! Full match state aggregate and the undo snapshot pairing.

use serde::{Deserialize, Serialize};

use super::score::{Point, ServePosition, SetScore, Team};

/// Complete scoring state of a match in progress.
///
/// Invariants held after every engine operation:
/// - `current_set_index == sets.len() - 1`
/// - `is_match_over` iff some team has won two sets; once set, the state is
///   frozen and further scoring calls are no-ops
/// - tiebreak counters are zero whenever `is_tiebreak` is false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_point: Point,
    pub opponent_point: Point,
    /// Point counters used only while `is_tiebreak` is true. Wide enough
    /// that a deadlocked tiebreak (margin never reaching two) keeps
    /// accepting points instead of overflowing.
    pub player_tiebreak_points: u16,
    pub opponent_tiebreak_points: u16,
    /// Sets in chronological order; only the last one is ever mutated.
    pub sets: Vec<SetScore>,
    /// Always the last valid index into `sets`.
    pub current_set_index: usize,
    pub serve_position: ServePosition,
    pub is_deuce: bool,
    pub is_tiebreak: bool,
    pub is_match_over: bool,
    pub winner: Option<Team>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh match: Love-All, games 0-0 in set one, serving from top-left.
    pub fn new() -> Self {
        Self {
            player_point: Point::Zero,
            opponent_point: Point::Zero,
            player_tiebreak_points: 0,
            opponent_tiebreak_points: 0,
            sets: vec![SetScore::new()],
            current_set_index: 0,
            serve_position: ServePosition::TopLeft,
            is_deuce: false,
            is_tiebreak: false,
            is_match_over: false,
            winner: None,
        }
    }

    /// The set currently being played (always the last one).
    pub fn current_set(&self) -> &SetScore {
        &self.sets[self.current_set_index]
    }

    pub fn current_set_mut(&mut self) -> &mut SetScore {
        &mut self.sets[self.current_set_index]
    }

    /// Regular-game point for `team`.
    pub fn point(&self, team: Team) -> Point {
        match team {
            Team::Player => self.player_point,
            Team::Opponent => self.opponent_point,
        }
    }

    pub fn set_point(&mut self, team: Team, point: Point) {
        match team {
            Team::Player => self.player_point = point,
            Team::Opponent => self.opponent_point = point,
        }
    }

    /// Tiebreak counter for `team`.
    pub fn tiebreak_points(&self, team: Team) -> u16 {
        match team {
            Team::Player => self.player_tiebreak_points,
            Team::Opponent => self.opponent_tiebreak_points,
        }
    }
}

/// Immutable snapshot taken before each scoring action, restored by undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub state: MatchState,
    /// Clock countdown value at the instant of the snapshot.
    pub remaining_secs: u64,
}
