pub mod match_state;
pub mod score;
pub mod session;

pub use match_state::{HistoryEntry, MatchState};
pub use score::{Point, ServePosition, SetScore, Team};
pub use session::SessionRecord;
