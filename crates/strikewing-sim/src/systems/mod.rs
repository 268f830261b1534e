//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or the registry when they
//! change group membership). They own no state; everything lives in
//! components or is passed in.

pub mod boss;
pub mod cleanup;
pub mod collision;
pub mod fire_control;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod update;
