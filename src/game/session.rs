//! Session lifecycle: restart-on-confirm and the process-wide high score.

use super::logic::{process_command, tick_session, Command, TickOutcome};
use super::types::{GameSession, Track};
use crate::constants::{MAX_FRAME_DT_MS, TICK_INTERVAL_MS};
use rand::Rng;

/// Owns the live session plus the one piece of state that outlives it: the
/// high score. Restarting swaps the session in place; the manager itself
/// lives for the whole process, so nothing is re-bound across replays.
#[derive(Debug)]
pub struct SessionManager {
    track: Track,
    session: GameSession,
    high_score: u32,
    /// Set when the most recent game over improved the high score; cleared
    /// on restart.
    new_record: bool,
    /// Sub-tick time accumulator (milliseconds).
    accumulated_ms: u64,
}

impl SessionManager {
    pub fn new<R: Rng>(track: Track, rng: &mut R) -> Self {
        Self {
            track,
            session: GameSession::new(track, rng),
            high_score: 0,
            new_record: false,
            accumulated_ms: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    /// Step the live session. The high score is written here, exactly once
    /// per instance, on the tick that crosses into game over.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        let outcome = tick_session(&mut self.session, rng);
        if outcome == TickOutcome::Ended && self.session.score > self.high_score {
            self.high_score = self.session.score;
            self.new_record = true;
        }
        outcome
    }

    /// Advance the live session by wall-clock time. Called from the main loop.
    ///
    /// `dt_ms` is milliseconds since last call. Internally steps the
    /// simulation in fixed 10ms ticks, so a slow frame catches up by running
    /// several ticks back to back. Returns true if the session state changed.
    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        if self.session.is_over() {
            return false;
        }

        // Clamp dt so time lost to a long stall is dropped, not replayed
        let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);

        self.accumulated_ms += dt_ms;
        let mut changed = false;

        while self.accumulated_ms >= TICK_INTERVAL_MS {
            self.accumulated_ms -= TICK_INTERVAL_MS;
            let outcome = self.tick(rng);
            changed = true;

            if outcome == TickOutcome::Ended {
                break;
            }
        }

        changed
    }

    /// Route one command to the live session. While running, movement goes
    /// straight through. After game over, movement is dead and Confirm
    /// tears the instance down and starts a fresh one.
    pub fn apply<R: Rng>(&mut self, command: Command, rng: &mut R) {
        if self.session.is_over() {
            if command == Command::Confirm {
                self.session = GameSession::new(self.track, rng);
                self.new_record = false;
                self.accumulated_ms = 0;
            }
            return;
        }
        process_command(&mut self.session, command);
    }
}
