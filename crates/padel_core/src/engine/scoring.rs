//! The scoring state machine.
//!
//! `score_point` applies one "point scored by team T" event to the full match
//! state: points into games, games into sets, sets into the match, with deuce
//! and tiebreak sub-modes. Every path is guard-and-return; there is no input
//! that can fail.

use crate::models::{MatchState, Point, Team};

use super::rules;

/// Apply a scored point for `team`. No-op once the match is over.
pub fn score_point(state: &mut MatchState, team: Team) {
    if state.is_match_over {
        return;
    }

    if state.is_tiebreak {
        score_tiebreak_point(state, team);
    } else {
        score_regular_point(state, team);
    }
}

fn score_regular_point(state: &mut MatchState, team: Team) {
    let mine = state.point(team);
    let theirs = state.point(team.opponent());

    if state.is_deuce {
        if mine == Point::Advantage {
            win_game(state, team);
        } else if theirs == Point::Advantage {
            // Advantage cancelled, back to 40-40. The game is still a deuce,
            // so the flag stays set.
            state.player_point = Point::Forty;
            state.opponent_point = Point::Forty;
        } else {
            state.set_point(team, Point::Advantage);
        }
        return;
    }

    if mine == Point::Forty && theirs == Point::Forty {
        state.set_point(team, Point::Advantage);
        state.is_deuce = true;
        return;
    }

    if mine == Point::Forty {
        win_game(state, team);
    } else if let Some(next) = mine.next() {
        state.set_point(team, next);
        if state.player_point == Point::Forty && state.opponent_point == Point::Forty {
            state.is_deuce = true;
        }
    }
}

fn score_tiebreak_point(state: &mut MatchState, team: Team) {
    // Saturate rather than overflow: a deadlocked tiebreak (margin never
    // reaching two) is a valid input sequence and must keep being one.
    match team {
        Team::Player => {
            state.player_tiebreak_points = state.player_tiebreak_points.saturating_add(1)
        }
        Team::Opponent => {
            state.opponent_tiebreak_points = state.opponent_tiebreak_points.saturating_add(1)
        }
    }

    // Serve changes after the first point, then every two points: the opening
    // server serves one point alone, after which the quadrant flips on every
    // odd cumulative total (1, 3, 5, ...).
    let total = u32::from(state.player_tiebreak_points) + u32::from(state.opponent_tiebreak_points);
    if total == 1 || (total > 1 && (total - 1) % 2 == 0) {
        state.serve_position = state.serve_position.next();
    }

    let mine = state.tiebreak_points(team);
    let theirs = state.tiebreak_points(team.opponent());
    if mine >= 7 && mine.saturating_sub(theirs) >= 2 {
        win_game(state, team);
    }
}

/// Credit a game to `team`, reset the game-level counters and carry on to
/// set completion or tiebreak entry.
fn win_game(state: &mut MatchState, team: Team) {
    state.current_set_mut().add_game(team);

    state.player_point = Point::Zero;
    state.opponent_point = Point::Zero;
    state.player_tiebreak_points = 0;
    state.opponent_tiebreak_points = 0;
    state.is_deuce = false;

    // In a tiebreak the serve already rotated on the point itself.
    if !state.is_tiebreak {
        state.serve_position = state.serve_position.next();
    }

    log::debug!(
        "game won by {}: set {} now {}-{}",
        team,
        state.current_set_index + 1,
        state.current_set().player_games,
        state.current_set().opponent_games
    );

    if rules::is_set_won(state.current_set(), team) {
        win_set(state, team);
    } else if rules::should_start_tiebreak(state.current_set()) {
        state.is_tiebreak = true;
        state.current_set_mut().is_tiebreak = true;
        log::debug!("set {} reached 6-6, entering tiebreak", state.current_set_index + 1);
    }
}

fn win_set(state: &mut MatchState, team: Team) {
    state.is_tiebreak = false;

    log::debug!("set {} won by {}", state.current_set_index + 1, team);

    // Best of 3, re-derived from the tallies rather than cached.
    if rules::sets_won(state, team) >= 2 {
        state.is_match_over = true;
        state.winner = Some(team);
        log::info!("match over, won by {}", team);
    } else {
        state.sets.push(Default::default());
        state.current_set_index += 1;
    }
}

/// Scoreboard text for `team`: the tiebreak counter while in a tiebreak,
/// otherwise the point label.
pub fn display_score(state: &MatchState, team: Team) -> String {
    if state.is_tiebreak {
        state.tiebreak_points(team).to_string()
    } else {
        state.point(team).label().to_string()
    }
}

/// Games won by `team` in set `set_index`; 0 for an out-of-range index.
pub fn games_in_set(state: &MatchState, set_index: usize, team: Team) -> u8 {
    match state.sets.get(set_index) {
        Some(set) => set.games(team),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServePosition;

    fn score_points(state: &mut MatchState, team: Team, count: usize) {
        for _ in 0..count {
            score_point(state, team);
        }
    }

    /// Drive the current set to the given tally with clean game wins,
    /// interleaved so neither side finishes the set early.
    fn play_games(state: &mut MatchState, player: u8, opponent: u8) {
        let paired = player.min(opponent);
        for _ in 0..paired {
            score_points(state, Team::Player, 4);
            score_points(state, Team::Opponent, 4);
        }
        for _ in 0..player - paired {
            score_points(state, Team::Player, 4);
        }
        for _ in 0..opponent - paired {
            score_points(state, Team::Opponent, 4);
        }
    }

    #[test]
    fn four_straight_points_win_the_game() {
        let mut state = MatchState::new();
        score_points(&mut state, Team::Player, 3);
        assert_eq!(state.player_point, Point::Forty);
        score_point(&mut state, Team::Player);
        assert_eq!(state.current_set().player_games, 1);
        assert_eq!(state.player_point, Point::Zero);
        assert_eq!(state.opponent_point, Point::Zero);
    }

    #[test]
    fn game_win_rotates_the_serve() {
        let mut state = MatchState::new();
        assert_eq!(state.serve_position, ServePosition::TopLeft);
        score_points(&mut state, Team::Player, 4);
        assert_eq!(state.serve_position, ServePosition::TopRight);
    }

    #[test]
    fn forty_all_enters_deuce_and_grants_advantage() {
        let mut state = MatchState::new();
        score_points(&mut state, Team::Player, 3);
        score_points(&mut state, Team::Opponent, 3);
        assert!(state.is_deuce);

        score_point(&mut state, Team::Player);
        assert_eq!(state.player_point, Point::Advantage);
    }

    #[test]
    fn losing_the_advantage_returns_both_to_forty() {
        let mut state = MatchState::new();
        score_points(&mut state, Team::Player, 3);
        score_points(&mut state, Team::Opponent, 3);
        score_point(&mut state, Team::Player); // advantage player

        score_point(&mut state, Team::Opponent);
        assert_eq!(state.player_point, Point::Forty);
        assert_eq!(state.opponent_point, Point::Forty);
        // Still a deuce; the flag stays up until the game resolves.
        assert!(state.is_deuce);
    }

    #[test]
    fn winning_from_advantage_takes_the_game() {
        let mut state = MatchState::new();
        score_points(&mut state, Team::Opponent, 3);
        score_points(&mut state, Team::Player, 3);
        score_point(&mut state, Team::Opponent); // advantage opponent
        score_point(&mut state, Team::Opponent);

        assert_eq!(state.current_set().opponent_games, 1);
        assert!(!state.is_deuce);
        assert_eq!(state.player_point, Point::Zero);
        assert_eq!(state.opponent_point, Point::Zero);
    }

    #[test]
    fn deuce_entry_via_forty_forty_sets_the_flag() {
        let mut state = MatchState::new();
        score_points(&mut state, Team::Player, 3);
        score_points(&mut state, Team::Opponent, 2);
        assert!(!state.is_deuce);
        score_point(&mut state, Team::Opponent);
        assert!(state.is_deuce);
    }

    #[test]
    fn six_six_flips_into_tiebreak_mode() {
        let mut state = MatchState::new();
        play_games(&mut state, 5, 6);
        score_points(&mut state, Team::Player, 4); // 6-6
        assert!(state.is_tiebreak);
        assert!(state.current_set().is_tiebreak);
        assert!(!state.is_match_over);

        // Next point is a tiebreak point, not regular progression.
        score_point(&mut state, Team::Player);
        assert_eq!(state.player_tiebreak_points, 1);
        assert_eq!(state.player_point, Point::Zero);
    }

    #[test]
    fn tiebreak_serve_rotates_after_odd_totals() {
        let mut state = MatchState::new();
        play_games(&mut state, 5, 6);
        score_points(&mut state, Team::Player, 4); // 6-6, tiebreak on
        let start = state.serve_position;

        let mut rotations = Vec::new();
        let mut previous = start;
        for total in 1..=8u8 {
            score_point(&mut state, if total % 2 == 0 { Team::Opponent } else { Team::Player });
            if state.serve_position != previous {
                rotations.push(total);
                previous = state.serve_position;
            }
        }
        assert_eq!(rotations, vec![1, 3, 5, 7]);
    }

    #[test]
    fn tiebreak_needs_seven_with_a_two_point_margin() {
        let mut state = MatchState::new();
        play_games(&mut state, 6, 5);
        score_points(&mut state, Team::Opponent, 4); // 6-6, tiebreak on

        // 6-6 inside the tiebreak, then 7-6: not decided yet.
        score_points(&mut state, Team::Player, 6);
        score_points(&mut state, Team::Opponent, 6);
        score_point(&mut state, Team::Player);
        assert!(state.is_tiebreak);
        assert_eq!(state.player_tiebreak_points, 7);

        // 8-6 closes the tiebreak and the set.
        score_point(&mut state, Team::Player);
        assert!(!state.is_tiebreak);
        assert_eq!(state.sets[0].player_games, 7);
        assert_eq!(state.sets[0].opponent_games, 6);
        assert!(state.sets[0].is_tiebreak);
        assert_eq!(state.sets.len(), 2);
    }

    #[test]
    fn tiebreak_won_at_seven_five_resolves_the_set() {
        let mut state = MatchState::new();
        play_games(&mut state, 5, 6);
        score_points(&mut state, Team::Player, 4); // 6-6, tiebreak on

        score_points(&mut state, Team::Player, 6);
        score_points(&mut state, Team::Opponent, 5);
        assert!(state.is_tiebreak); // 6-5, not decided

        score_point(&mut state, Team::Player); // 7-5 takes the tiebreak
        assert!(!state.is_tiebreak);
        assert_eq!(state.sets[0].player_games, 7);
        assert_eq!(state.sets[0].opponent_games, 6);
        assert!(state.sets[0].is_tiebreak);
        assert_eq!(state.sets.len(), 2);
        assert!(!state.is_match_over);
    }

    #[test]
    fn deadlocked_tiebreak_keeps_accepting_points() {
        let mut state = MatchState::new();
        play_games(&mut state, 6, 5);
        score_points(&mut state, Team::Opponent, 4); // 6-6, tiebreak on

        // Alternating points never open a two-point margin, so the tiebreak
        // runs on indefinitely; a long deadlock must still be a valid input.
        for i in 0..300 {
            let team = if i % 2 == 0 { Team::Player } else { Team::Opponent };
            score_point(&mut state, team);
        }
        assert!(state.is_tiebreak);
        assert_eq!(state.player_tiebreak_points, 150);
        assert_eq!(state.opponent_tiebreak_points, 150);
        assert!(!state.is_match_over);
    }

    #[test]
    fn winning_two_sets_ends_the_match() {
        let mut state = MatchState::new();
        play_games(&mut state, 6, 0);
        assert_eq!(state.sets.len(), 2);
        assert_eq!(state.current_set_index, 1);

        play_games(&mut state, 6, 0);
        assert!(state.is_match_over);
        assert_eq!(state.winner, Some(Team::Player));
        // No fresh set is appended once the match is decided.
        assert_eq!(state.sets.len(), 2);
    }

    #[test]
    fn split_sets_create_a_third() {
        let mut state = MatchState::new();
        play_games(&mut state, 6, 0);
        play_games(&mut state, 0, 6);
        assert!(!state.is_match_over);
        assert_eq!(state.sets.len(), 3);
        assert_eq!(state.current_set_index, 2);
        assert_eq!(*state.current_set(), Default::default());
    }

    #[test]
    fn scoring_after_match_over_is_ignored() {
        let mut state = MatchState::new();
        play_games(&mut state, 6, 0);
        play_games(&mut state, 6, 0);
        let frozen = state.clone();

        score_point(&mut state, Team::Opponent);
        score_point(&mut state, Team::Player);
        assert_eq!(state, frozen);
    }

    #[test]
    fn display_score_switches_with_tiebreak_mode() {
        let mut state = MatchState::new();
        score_point(&mut state, Team::Player);
        assert_eq!(display_score(&state, Team::Player), "15");
        assert_eq!(display_score(&state, Team::Opponent), "0");

        state = MatchState::new();
        play_games(&mut state, 6, 5);
        score_points(&mut state, Team::Opponent, 4); // tiebreak on
        score_point(&mut state, Team::Player);
        assert_eq!(display_score(&state, Team::Player), "1");
        assert_eq!(display_score(&state, Team::Opponent), "0");
    }

    #[test]
    fn games_in_set_is_zero_out_of_range() {
        let state = MatchState::new();
        assert_eq!(games_in_set(&state, 0, Team::Player), 0);
        assert_eq!(games_in_set(&state, 5, Team::Player), 0);
    }

    #[test]
    fn counters_stay_zero_outside_tiebreaks() {
        let mut state = MatchState::new();
        play_games(&mut state, 6, 4);
        assert_eq!(state.player_tiebreak_points, 0);
        assert_eq!(state.opponent_tiebreak_points, 0);
        assert!(!state.is_tiebreak);
    }

    #[test]
    fn current_set_index_tracks_the_last_set() {
        let mut state = MatchState::new();
        play_games(&mut state, 6, 3);
        assert_eq!(state.current_set_index, state.sets.len() - 1);
        play_games(&mut state, 2, 6);
        assert_eq!(state.current_set_index, state.sets.len() - 1);
    }
}
