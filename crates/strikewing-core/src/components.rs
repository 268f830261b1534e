//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems; the few helper
//! methods here only read or initialise fields.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Tags an entity with its variant. Systems dispatch on this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor {
    pub kind: ActorKind,
}

/// Damageable hull. Every simulated entity carries one; projectiles have a
/// single point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub health: i32,
    pub max_health: i32,
    /// Set exactly once; a destroyed entity is never updated again.
    pub destroyed: bool,
}

impl Hull {
    pub fn new(health: i32) -> Self {
        Self {
            health,
            max_health: health,
            destroyed: false,
        }
    }
}

/// Probabilistic weapon of an enemy or boss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireControl {
    /// Per-tick probability of firing.
    pub fire_rate: f64,
    pub weapon: ProjectileKind,
}

/// Input-driven steering state of the player craft.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerControl {
    /// -1 = up, +1 = down, 0 = hold.
    pub vertical: i8,
    /// -1 = left, +1 = right, 0 = hold.
    pub horizontal: i8,
    /// Ticks until the next shot is accepted.
    pub fire_cooldown: u32,
}
