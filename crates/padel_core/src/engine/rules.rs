//! Set and match completion rules.
//!
//! Pure predicates over a game tally. They never mutate state; the scoring
//! engine consults them after every game win.

use crate::models::{MatchState, SetScore, Team};

/// Whether `team` has won the given set.
///
/// Tiebreak set: the side that took the tiebreak holds seven games (the 6-6
/// entry plus the tiebreak game itself), so seven games and a strictly higher
/// tally decide it. Regular set: `team` needs at least 6 games with a margin
/// of 2, which covers 6-0 through 6-4 and 7-5. 6-5 is not a win and 6-6 never
/// ends a set because the tiebreak is forced first.
pub fn is_set_won(set: &SetScore, team: Team) -> bool {
    let mine = set.games(team);
    let theirs = set.games(team.opponent());

    if set.is_tiebreak {
        return mine >= 7 && mine > theirs;
    }

    mine >= 6 && mine.saturating_sub(theirs) >= 2
}

/// A tiebreak starts at exactly 6-6, once.
pub fn should_start_tiebreak(set: &SetScore) -> bool {
    set.player_games == 6 && set.opponent_games == 6 && !set.is_tiebreak
}

/// Sets won by `team` across the whole match, re-derived from the tallies.
pub fn sets_won(state: &MatchState, team: Team) -> usize {
    state.sets.iter().filter(|set| is_set_won(set, team)).count()
}
