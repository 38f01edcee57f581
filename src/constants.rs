// Simulation timing constants
pub const TICK_INTERVAL_MS: u64 = 10;

// A single frame never feeds more than this much elapsed time into the
// simulation; lag beyond it is coalesced rather than replayed.
pub const MAX_FRAME_DT_MS: u64 = 100;

// How long the main loop waits for a key event before checking the clock.
pub const POLL_TIMEOUT_MS: u64 = 16;
