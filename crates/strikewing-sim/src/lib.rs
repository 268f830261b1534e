//! Simulation engine for STRIKEWING.
//!
//! Owns the hecs ECS world through the entity registry, runs one level at a
//! fixed tick, resolves collisions and reports level transitions. Produces
//! `GameStateSnapshot`s for the presentation layer.

pub mod campaign;
pub mod capabilities;
pub mod components;
pub mod damage;
pub mod engine;
pub mod levels;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use campaign::Campaign;
pub use engine::{LevelSimulation, SimConfig};
pub use registry::EntityRegistry;
pub use strikewing_core as core;
