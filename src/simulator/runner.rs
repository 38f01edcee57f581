//! Batch simulation runner driving real game sessions.
//!
//! Each run plays a full session through the same tick engine the terminal
//! game uses; only the steering comes from a policy instead of a keyboard,
//! so simulated results match real play.

use super::config::{LanePolicy, SimConfig};
use super::report::{RunStats, SimReport};
use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::game::{
    process_command, tick_session, Command, GameSession, TickOutcome, Track, Vehicle, LANE_COUNT,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Gap between an incoming car and the player, in track units, at which the
/// dodge policy reacts.
const DODGE_WINDOW: f64 = 150.0;

/// Chance per tick that the random policy drifts a lane.
const DRIFT_CHANCE: f64 = 0.01;

/// Run the full batch and return an aggregated report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Ticks {}, Speed {:.1}, {}",
                run_idx + 1,
                config.num_runs,
                run_stats.score,
                run_stats.ticks_survived,
                run_stats.final_speed,
                if run_stats.crashed { "crashed" } else { "survived" }
            );
        }

        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.policy)
}

/// Play one full session under the configured policy.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut session = GameSession::new(Track::new(DEFAULT_WIDTH, DEFAULT_HEIGHT), rng);

    let mut ticks: u64 = 0;
    let mut lane_changes: u64 = 0;

    while ticks < config.max_ticks_per_run {
        if let Some(command) = choose_command(config.policy, &session, rng) {
            let lane_before = session.lane;
            process_command(&mut session, command);
            if session.lane != lane_before {
                lane_changes += 1;
            }
        }

        let outcome = tick_session(&mut session, rng);
        ticks += 1;

        if outcome == TickOutcome::Ended {
            break;
        }
    }

    RunStats {
        score: session.score,
        ticks_survived: ticks,
        crashed: session.is_over(),
        final_speed: session.speed,
        obstacles_spawned: session.score + session.obstacles.len() as u32,
        lane_changes,
    }
}

/// Pick this tick's steering command, if any.
fn choose_command<R: Rng>(
    policy: LanePolicy,
    session: &GameSession,
    rng: &mut R,
) -> Option<Command> {
    match policy {
        LanePolicy::Stay => None,
        LanePolicy::Random => {
            if rng.gen_bool(DRIFT_CHANCE) {
                if rng.gen_bool(0.5) {
                    Some(Command::MoveLeft)
                } else {
                    Some(Command::MoveRight)
                }
            } else {
                None
            }
        }
        LanePolicy::Dodge => dodge_command(session),
    }
}

/// Swerve out of the player's lane when a car is closing in. Prefers the
/// left neighbor, falls back to the right, stays put when both are blocked.
fn dodge_command(session: &GameSession) -> Option<Command> {
    let lane = session.lane;
    if !lane_threatened(session, lane) {
        return None;
    }

    if lane > 0 && !lane_threatened(session, lane - 1) {
        return Some(Command::MoveLeft);
    }
    if lane + 1 < LANE_COUNT && !lane_threatened(session, lane + 1) {
        return Some(Command::MoveRight);
    }
    None
}

/// True when a car in the given lane sits inside the dodge window above the
/// player or already overlaps the player's rows.
fn lane_threatened(session: &GameSession, lane: usize) -> bool {
    let player = &session.player;
    session
        .obstacles
        .iter()
        .filter(|o| obstacle_lane(&session.track, o) == lane)
        .any(|o| o.y + o.height >= player.y - DODGE_WINDOW && o.y <= player.y + player.height)
}

/// Which lane an obstacle occupies, by its center x.
fn obstacle_lane(track: &Track, vehicle: &Vehicle) -> usize {
    let lane_width = track.width / LANE_COUNT as f64;
    let center = vehicle.x + vehicle.width / 2.0;
    ((center / lane_width) as usize).min(LANE_COUNT - 1)
}
