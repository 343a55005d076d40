//! Read-only JSON projection of a live match.
//!
//! Embedding UIs (phone, watch, anything that can parse JSON) render from
//! this snapshot instead of reaching into the engine types. The snapshot is
//! a plain value: producing it never mutates the match.

use serde::{Deserialize, Serialize};

use crate::engine::PadelMatch;
use crate::models::{ServePosition, SetScore, Team};
use crate::SCHEMA_VERSION;

/// Everything a scoreboard needs, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub schema_version: u8,
    /// Scoreboard text per side: point labels, or tiebreak counters while in
    /// a tiebreak.
    pub player_score: String,
    pub opponent_score: String,
    /// Game tallies for every set played so far, chronological.
    pub sets: Vec<SetScore>,
    pub current_set_index: usize,
    pub serve_position: ServePosition,
    pub is_deuce: bool,
    pub is_tiebreak: bool,
    pub is_match_over: bool,
    pub winner: Option<Team>,
    pub remaining_time: String,
    pub elapsed_time: String,
    pub progress: f64,
    pub is_time_low: bool,
    pub can_undo: bool,
}

impl MatchSnapshot {
    pub fn from_match(padel_match: &PadelMatch) -> Self {
        let state = padel_match.state();
        Self {
            schema_version: SCHEMA_VERSION,
            player_score: padel_match.display_score(Team::Player),
            opponent_score: padel_match.display_score(Team::Opponent),
            sets: state.sets.clone(),
            current_set_index: state.current_set_index,
            serve_position: state.serve_position,
            is_deuce: state.is_deuce,
            is_tiebreak: state.is_tiebreak,
            is_match_over: state.is_match_over,
            winner: state.winner,
            remaining_time: padel_match.formatted_remaining(),
            elapsed_time: padel_match.formatted_elapsed(),
            progress: padel_match.progress_percentage(),
            is_time_low: padel_match.is_time_low(),
            can_undo: padel_match.can_undo(),
        }
    }
}

/// Snapshot the match as a JSON string.
pub fn match_snapshot_json(padel_match: &PadelMatch) -> Result<String, serde_json::Error> {
    serde_json::to_string(&MatchSnapshot::from_match(padel_match))
}
