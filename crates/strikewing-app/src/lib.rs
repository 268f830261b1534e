//! Headless host for the STRIKEWING simulation.
//!
//! Runs the campaign on a fixed-tick game-loop thread, takes player
//! commands over a channel and keeps the latest snapshot for polling.
//! Campaigns can be loaded from JSON.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod state;
