use padel_core::{match_snapshot_json, PadelMatch, Team};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Scoring a scripted match...");

    let mut m = PadelMatch::new(90 * 60);
    m.start_clock();

    // Set 1: player runs away with it 6-0.
    for _ in 0..6 {
        win_game(&mut m, Team::Player);
    }
    report(&m, "after set 1");

    // Set 2: opponent levels the match.
    for _ in 0..6 {
        win_game(&mut m, Team::Opponent);
    }
    report(&m, "after set 2");

    // Set 3: traded games to 6-6, then player takes the tiebreak 7-0.
    for _ in 0..6 {
        win_game(&mut m, Team::Player);
        win_game(&mut m, Team::Opponent);
    }
    report(&m, "at 6-6 in set 3");
    for _ in 0..7 {
        m.tick();
        m.score_point(Team::Player);
    }
    report(&m, "after the tiebreak");

    match m.winner() {
        Some(winner) => println!("Winner: {}", winner),
        None => return Err("match should be decided".into()),
    }

    let record = m.session_record().ok_or("finished match should yield a record")?;
    println!(
        "Session {}: {} sets, duration {}",
        record.id,
        record.sets.len(),
        record.formatted_duration()
    );

    println!("\nFinal snapshot:\n{}", match_snapshot_json(&m)?);
    Ok(())
}

fn win_game(m: &mut PadelMatch, team: Team) {
    for _ in 0..4 {
        m.tick();
        m.score_point(team);
    }
}

fn report(m: &PadelMatch, label: &str) {
    let sets: Vec<String> = m
        .state()
        .sets
        .iter()
        .map(|set| format!("{}-{}", set.player_games, set.opponent_games))
        .collect();
    println!(
        "{}: sets [{}], score {}-{}, elapsed {}",
        label,
        sets.join(", "),
        m.display_score(Team::Player),
        m.display_score(Team::Opponent),
        m.formatted_elapsed()
    );
}
