//! # padel_core - Padel Match Scoring Engine
//!
//! Pure scoring core for a padel referee app: point progression with deuce
//! and advantage, game/set/match completion, tiebreak rules, serve rotation,
//! a bounded undo history and a countdown/elapsed match clock.
//!
//! ## Design
//! - Single-threaded and event-driven: score, undo and tick calls are
//!   serialized by the embedding layer; nothing here locks or spawns.
//! - Total functions: every public operation is callable in any state.
//!   Scoring a finished match, undoing with an empty history or reading an
//!   out-of-range set all guard and return instead of failing.
//! - Presentation-agnostic: UIs render from [`api::MatchSnapshot`] or the
//!   individual projections; the engine broadcasts nothing.

pub mod api;
pub mod engine;
pub mod models;
pub mod store;

pub use api::{match_snapshot_json, MatchSnapshot};
pub use engine::{format_clock, History, MatchClock, PadelMatch, HISTORY_LIMIT};
pub use models::{HistoryEntry, MatchState, Point, ServePosition, SessionRecord, SetScore, Team};
pub use store::{SessionStore, StoreError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    /// End-to-end: play a straight-sets match through the public surface and
    /// archive it.
    #[test]
    fn full_match_flows_into_the_archive() {
        let mut m = PadelMatch::new(3600);
        m.start_clock();

        while !m.is_match_over() {
            m.tick();
            m.score_point(Team::Player);
        }

        assert_eq!(m.winner(), Some(Team::Player));
        assert_eq!(m.games_in_set(0, Team::Player), 6);
        assert_eq!(m.games_in_set(1, Team::Player), 6);

        let record = m.session_record().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("sessions.json")).unwrap();
        store.add(record.clone()).unwrap();
        assert_eq!(store.sessions()[0].winner, Team::Player);
        assert_eq!(store.sessions()[0].sets, record.sets);
    }

    #[test]
    fn snapshot_json_tracks_a_live_match() {
        let mut m = PadelMatch::new(1800);
        m.start_clock();
        m.tick();
        m.score_point(Team::Opponent);

        let json = match_snapshot_json(&m).unwrap();
        let snap: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap.opponent_score, "15");
        assert_eq!(snap.remaining_time, "00:29:59");
        assert!(snap.can_undo);
    }
}
