//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A craft launched a projectile.
    ShotFired {
        shooter: ActorKind,
        projectile: ActorKind,
    },
    /// A new enemy craft entered the arena.
    EnemySpawned { kind: ActorKind, position: Position },
    /// A craft was destroyed in combat.
    CraftDestroyed { kind: ActorKind, position: Position },
    /// The player's hull took a hit.
    PlayerHit { remaining_health: i32 },
    ShieldRaised,
    /// The shield's absorption pool ran out.
    ShieldBroken,
    /// The shield timed out.
    ShieldExpired,
    /// The level reached a terminal state.
    LevelFinished { transition: Transition },
}
