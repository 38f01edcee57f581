//! Lane Dodge - Terminal Lane-Dodging Game Library
//!
//! This module exposes the game logic for the binaries, tests, and the
//! balance simulator.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod simulator;
pub mod ui;
