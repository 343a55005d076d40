//! Scoring primitives: point values, teams, serve quadrants and per-set tallies.
//!
//! These are plain value types. Point progression is table-driven (0 -> 15 ->
//! 30 -> 40); what happens past 40 is the scoring engine's decision, not a
//! property of the point value itself.

use serde::{Deserialize, Serialize};

/// Point value within a regular (non-tiebreak) game.
///
/// Ordinal, not arithmetic: there is no "add", only the table transitions
/// below. `Forty` and `Advantage` have no successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Point {
    Zero,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
}

impl Point {
    /// Next point in the 0 -> 15 -> 30 -> 40 progression.
    ///
    /// Returns `None` for `Forty` and `Advantage`; reaching past those is a
    /// game win and handled by the scoring engine.
    pub fn next(self) -> Option<Point> {
        match self {
            Point::Zero => Some(Point::Fifteen),
            Point::Fifteen => Some(Point::Thirty),
            Point::Thirty => Some(Point::Forty),
            Point::Forty => None,
            Point::Advantage => None,
        }
    }

    /// Previous point in the progression. `Zero` has none.
    pub fn previous(self) -> Option<Point> {
        match self {
            Point::Zero => None,
            Point::Fifteen => Some(Point::Zero),
            Point::Thirty => Some(Point::Fifteen),
            Point::Forty => Some(Point::Thirty),
            Point::Advantage => Some(Point::Forty),
        }
    }

    /// Scoreboard label ("0", "15", "30", "40", "AD").
    pub fn label(self) -> &'static str {
        match self {
            Point::Zero => "0",
            Point::Fifteen => "15",
            Point::Thirty => "30",
            Point::Forty => "40",
            Point::Advantage => "AD",
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::Zero
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the two sides of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Player,
    Opponent,
}

impl Team {
    /// The other side.
    pub fn opponent(self) -> Team {
        match self {
            Team::Player => Team::Opponent,
            Team::Opponent => Team::Player,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Player => write!(f, "player"),
            Team::Opponent => write!(f, "opponent"),
        }
    }
}

/// Court quadrant the current serve is taken from, cyclically ordered.
///
/// Rotates forward one step per game in regular play, and on the tiebreak's
/// odd cumulative points. Never rotates backward during forward play;
/// `previous` exists for symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServePosition {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl ServePosition {
    const CYCLE: [ServePosition; 4] = [
        ServePosition::TopLeft,
        ServePosition::TopRight,
        ServePosition::BottomLeft,
        ServePosition::BottomRight,
    ];

    /// Next quadrant: (n + 1) mod 4.
    pub fn next(self) -> ServePosition {
        Self::CYCLE[(self as usize + 1) % 4]
    }

    /// Previous quadrant: (n + 3) mod 4.
    pub fn previous(self) -> ServePosition {
        Self::CYCLE[(self as usize + 3) % 4]
    }
}

impl Default for ServePosition {
    fn default() -> Self {
        ServePosition::TopLeft
    }
}

/// Game tally for one set. In a tiebreak set the deciding "game" is the
/// tiebreak itself, recorded through the same tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetScore {
    pub player_games: u8,
    pub opponent_games: u8,
    pub is_tiebreak: bool,
}

impl SetScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by `team` in this set.
    pub fn games(&self, team: Team) -> u8 {
        match team {
            Team::Player => self.player_games,
            Team::Opponent => self.opponent_games,
        }
    }

    /// Credit one game to `team`.
    pub fn add_game(&mut self, team: Team) {
        match team {
            Team::Player => self.player_games += 1,
            Team::Opponent => self.opponent_games += 1,
        }
    }
}
