//! Lane Dodge game logic: input handling, spawning, collision, scoring.

use super::types::*;
use rand::Rng;

/// UI-agnostic commands a session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,  // Left arrow or 'a'
    MoveRight, // Right arrow or 'd'
    Confirm,   // Space or Enter; restarts after game over
}

/// What one completed tick meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session is still running.
    Continued,
    /// This tick crossed into game over. Reported exactly once.
    Ended,
    /// Session was already over; nothing moved.
    Idle,
}

/// Apply one command to a running session. Movement is dead after game
/// over, and Confirm belongs to the session manager (it rebuilds the
/// instance), so neither does anything here in that phase. Out-of-range
/// lane targets clamp; there is no error path.
pub fn process_command(session: &mut GameSession, command: Command) {
    if session.is_over() {
        return;
    }
    match command {
        Command::MoveLeft => {
            session.lane = session
                .player
                .set_lane(session.lane as i32 - 1, &session.track);
        }
        Command::MoveRight => {
            session.lane = session
                .player
                .set_lane(session.lane as i32 + 1, &session.track);
        }
        Command::Confirm => {}
    }
}

/// Inclusive axis-aligned overlap test; boxes that merely touch count as
/// overlapping. Symmetric in its arguments.
pub fn collides(a: &Vehicle, b: &Vehicle) -> bool {
    a.x <= b.x + b.width
        && a.x + a.width >= b.x
        && a.y <= b.y + b.height
        && a.y + a.height >= b.y
}

/// True if the player overlaps any obstacle. Stops at the first hit.
pub fn any_collision(player: &Vehicle, obstacles: &[Vehicle]) -> bool {
    obstacles.iter().any(|o| collides(player, o))
}

/// Spawn test for one tick: draw an interval `n` from
/// [SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX] and pass iff `tick % n == 0`.
/// Tick 0 passes for every possible `n`, so an instance opens with a spawn
/// and spawns again whenever the counter wraps to 0.
fn should_spawn<R: Rng>(tick: u32, rng: &mut R) -> bool {
    tick % rng.gen_range(SPAWN_INTERVAL_MIN..=SPAWN_INTERVAL_MAX) == 0
}

/// Advance one simulation step.
///
/// Stage order matters: the spawn test sees the pre-increment counter, the
/// collision check and the retirement pass both see the post-advance
/// positions of this tick, and the counter only moves at the end. A tick
/// that ends the game skips retirement and leaves the counter untouched.
pub fn tick_session<R: Rng>(session: &mut GameSession, rng: &mut R) -> TickOutcome {
    if session.is_over() {
        return TickOutcome::Idle;
    }

    // 1. Maybe spawn. A freshly spawned obstacle advances this same tick.
    if should_spawn(session.tick, rng) {
        session.spawn_obstacle(rng);
    }

    // 2. Everything rolls down at the shared speed.
    let speed = session.speed;
    for obstacle in &mut session.obstacles {
        obstacle.advance(speed);
    }

    // 3. Collision ends the instance on the spot.
    if any_collision(&session.player, &session.obstacles) {
        session.phase = Phase::GameOver;
        return TickOutcome::Ended;
    }

    // 4. Obstacles that cleared the bottom edge score one point each.
    //    retain keeps the survivors in their original order.
    let track_height = session.track.height;
    let before = session.obstacles.len();
    session.obstacles.retain(|o| o.y < track_height);
    session.score += (before - session.obstacles.len()) as u32;

    // 5. Move the counter, wrapping the value only.
    session.tick = (session.tick + 1) % TICK_WRAP;

    TickOutcome::Continued
}
