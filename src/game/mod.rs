//! Core simulation: track model, per-tick logic, session lifecycle.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::*;
pub use session::*;
pub use types::*;
