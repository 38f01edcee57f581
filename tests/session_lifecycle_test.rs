//! Integration tests for the session lifecycle: crash, restart, and the
//! process-wide high score.
//!
//! The manager owns the live session; these tests walk full play arcs
//! through it and check what survives a restart and what resets.

use lanedodge::game::{
    Command, Phase, SessionManager, TickOutcome, Track, Vehicle, INITIAL_SPEED, PLAYER_HOME_LANE,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_manager(seed: u64) -> (SessionManager, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let manager = SessionManager::new(Track::new(800.0, 600.0), &mut rng);
    (manager, rng)
}

/// Stage a car on top of the player and tick once, ending the live session
/// with the given score on the board.
fn crash_with_score(manager: &mut SessionManager, rng: &mut ChaCha8Rng, score: u32) {
    let session = manager.session_mut();
    let mut killer = Vehicle::obstacle(&session.track, session.lane, (0, 0, 0));
    killer.y = 400.0;
    session.score = score;
    session.tick = 1;
    session.obstacles = vec![killer];

    assert_eq!(manager.tick(rng), TickOutcome::Ended);
}

#[test]
fn test_restart_after_crash_starts_fresh() {
    let (mut manager, mut rng) = new_manager(1);
    crash_with_score(&mut manager, &mut rng, 4);
    assert!(manager.session().is_over());

    manager.apply(Command::Confirm, &mut rng);

    let session = manager.session();
    assert_eq!(session.phase, Phase::Running);
    assert_eq!(session.tick, 0);
    assert_eq!(session.score, 0);
    assert!((session.speed - INITIAL_SPEED).abs() < f64::EPSILON);
    assert_eq!(session.lane, PLAYER_HOME_LANE);
    assert!(session.obstacles.is_empty());
    // The high score is the one thing the restart keeps
    assert_eq!(manager.high_score(), 4);
}

#[test]
fn test_high_score_tracks_best_across_replays() {
    let (mut manager, mut rng) = new_manager(2);

    crash_with_score(&mut manager, &mut rng, 7);
    assert_eq!(manager.high_score(), 7);
    assert!(manager.is_new_record());

    manager.apply(Command::Confirm, &mut rng);
    crash_with_score(&mut manager, &mut rng, 3);
    assert_eq!(manager.high_score(), 7);
    assert!(!manager.is_new_record());

    manager.apply(Command::Confirm, &mut rng);
    crash_with_score(&mut manager, &mut rng, 9);
    assert_eq!(manager.high_score(), 9);
    assert!(manager.is_new_record());
}

#[test]
fn test_commands_route_by_phase() {
    let (mut manager, mut rng) = new_manager(3);

    // Running: movement works, Confirm is a no-op
    manager.apply(Command::MoveLeft, &mut rng);
    assert_eq!(manager.session().lane, 0);
    manager.apply(Command::Confirm, &mut rng);
    assert_eq!(manager.session().lane, 0);
    assert_eq!(manager.session().phase, Phase::Running);

    // Game over: movement is dead
    crash_with_score(&mut manager, &mut rng, 1);
    manager.apply(Command::MoveRight, &mut rng);
    assert!(manager.session().is_over());
    assert_eq!(manager.session().lane, 0);

    // Confirm brings back a fresh session in the home lane
    manager.apply(Command::Confirm, &mut rng);
    assert_eq!(manager.session().phase, Phase::Running);
    assert_eq!(manager.session().lane, PLAYER_HOME_LANE);
}

#[test]
fn test_advance_drives_ticks_and_respects_game_over() {
    let (mut manager, mut rng) = new_manager(4);

    assert!(manager.advance(100, &mut rng));
    assert_eq!(manager.session().tick, 10);

    crash_with_score(&mut manager, &mut rng, 2);
    let tick_at_crash = manager.session().tick;

    assert!(!manager.advance(100, &mut rng));
    assert_eq!(manager.session().tick, tick_at_crash);
}

#[test]
fn test_restart_reseats_player_at_home() {
    let (mut manager, mut rng) = new_manager(5);
    manager.apply(Command::MoveRight, &mut rng);
    crash_with_score(&mut manager, &mut rng, 1);

    manager.apply(Command::Confirm, &mut rng);

    let player = &manager.session().player;
    assert!((player.x - 375.0).abs() < f64::EPSILON);
    assert!((player.y - 480.0).abs() < f64::EPSILON);
}
