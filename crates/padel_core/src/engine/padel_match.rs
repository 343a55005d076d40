//! The match aggregate: scoring state, undo history and clock behind one
//! single-threaded mutation funnel.
//!
//! Every mutation enters through this type, which keeps the snapshot
//! contract honest: exactly one history entry per externally visible scoring
//! action, taken before the state machine runs. Embedders drive it from one
//! event context (taps and a 1 Hz timer callback); nothing here locks.

use chrono::Utc;

use crate::models::{MatchState, ServePosition, SessionRecord, Team};

use super::clock::MatchClock;
use super::history::History;
use super::scoring;

pub struct PadelMatch {
    state: MatchState,
    history: History,
    clock: MatchClock,
}

impl PadelMatch {
    /// Fresh match with the configured duration, stopped clock and empty
    /// history.
    pub fn new(duration_secs: u64) -> Self {
        Self { state: MatchState::new(), history: History::new(), clock: MatchClock::new(duration_secs) }
    }

    // ---- scoring ----

    /// Score one point for `team`. Snapshots the prior state for undo, then
    /// runs the state machine. Silently ignored once the match is over.
    pub fn score_point(&mut self, team: Team) {
        if self.state.is_match_over {
            return;
        }
        self.history.save(&self.state, self.clock.remaining_secs());
        scoring::score_point(&mut self.state, team);
        if self.state.is_match_over {
            self.clock.stop();
        }
    }

    /// Step back one scoring action, restoring state and countdown. No-op
    /// with an empty history.
    pub fn undo(&mut self) {
        let mut remaining = self.clock.remaining_secs();
        if self.history.undo(&mut self.state, &mut remaining) {
            self.clock.set_remaining_secs(remaining);
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    // ---- clock ----

    pub fn start_clock(&mut self) {
        self.clock.start();
    }

    pub fn stop_clock(&mut self) {
        self.clock.stop();
    }

    pub fn tick(&mut self) {
        self.clock.tick();
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    // ---- projections ----

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn display_score(&self, team: Team) -> String {
        scoring::display_score(&self.state, team)
    }

    pub fn games_in_set(&self, set_index: usize, team: Team) -> u8 {
        scoring::games_in_set(&self.state, set_index, team)
    }

    pub fn serve_position(&self) -> ServePosition {
        self.state.serve_position
    }

    pub fn is_match_over(&self) -> bool {
        self.state.is_match_over
    }

    pub fn winner(&self) -> Option<Team> {
        self.state.winner
    }

    pub fn formatted_remaining(&self) -> String {
        self.clock.formatted_remaining()
    }

    pub fn formatted_elapsed(&self) -> String {
        self.clock.formatted_elapsed()
    }

    pub fn progress_percentage(&self) -> f64 {
        self.clock.progress_percentage()
    }

    pub fn is_time_low(&self) -> bool {
        self.clock.is_time_low()
    }

    // ---- completion ----

    /// Archival record for a finished match: dated now, with the elapsed
    /// playing time and final set tallies. `None` while the match is live.
    pub fn session_record(&self) -> Option<SessionRecord> {
        let winner = self.state.winner?;
        if !self.state.is_match_over {
            return None;
        }
        Some(SessionRecord::new(
            Utc::now(),
            self.clock.elapsed_secs(),
            winner,
            self.state.sets.clone(),
        ))
    }
}
