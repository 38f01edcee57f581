//! Game balance simulator for Monte Carlo analysis.
//!
//! Run batches of simulated sessions to analyze:
//! - How long each steering policy survives
//! - Score pacing as the obstacle speed ramps
//! - Whether the spawn cadence leaves an escape lane
//!
//! The simulator drives the same tick engine as the terminal game, so
//! simulation results match real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::{LanePolicy, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
