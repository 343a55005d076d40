pub mod clock;
pub mod history;
pub mod padel_match;
pub mod rules;
pub mod scoring;

pub use clock::{format_clock, MatchClock, TIME_LOW_THRESHOLD_SECS};
pub use history::{History, HISTORY_LIMIT};
pub use padel_match::PadelMatch;
pub use scoring::{display_score, games_in_set, score_point};
