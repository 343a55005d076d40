//! Archival record of a completed match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::score::{SetScore, Team};

/// Immutable summary handed to the session store once a match ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// Elapsed playing time in seconds.
    pub duration_secs: u64,
    pub winner: Team,
    /// Final set tallies in the order they were played.
    pub sets: Vec<SetScore>,
}

impl SessionRecord {
    pub fn new(date: DateTime<Utc>, duration_secs: u64, winner: Team, sets: Vec<SetScore>) -> Self {
        Self { id: Uuid::new_v4(), date, duration_secs, winner, sets }
    }

    /// Duration as `HH:MM:SS`.
    pub fn formatted_duration(&self) -> String {
        let hours = self.duration_secs / 3600;
        let minutes = (self.duration_secs % 3600) / 60;
        let seconds = self.duration_secs % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }

    /// Date as e.g. `12 Mar 2026, 18:45`.
    pub fn formatted_date(&self) -> String {
        self.date.format("%d %b %Y, %H:%M").to_string()
    }
}
