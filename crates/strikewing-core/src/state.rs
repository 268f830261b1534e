//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Arena, Extent, Position, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub level_name: String,
    pub phase: LevelPhase,
    pub arena: Arena,
    pub kill_count: u32,
    /// Kills required to clear the level, for kill-count objectives.
    pub kill_target: Option<u32>,
    pub player: CraftView,
    pub enemies: Vec<CraftView>,
    pub player_projectiles: Vec<ProjectileView>,
    pub enemy_projectiles: Vec<ProjectileView>,
    pub boss: Option<BossView>,
    pub events: Vec<SimEvent>,
}

/// A craft on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftView {
    /// Stable entity handle bits, for mirroring in the scene graph.
    pub id: u64,
    pub kind: ActorKind,
    pub position: Position,
    pub extent: Extent,
    pub health: i32,
    pub max_health: i32,
}

impl Default for CraftView {
    fn default() -> Self {
        Self {
            id: 0,
            kind: ActorKind::Player,
            position: Position::default(),
            extent: Extent::default(),
            health: 0,
            max_health: 0,
        }
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub kind: ActorKind,
    pub position: Position,
    pub extent: Extent,
}

/// Boss status for the health bar and shield overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub id: u64,
    pub health: i32,
    pub max_health: i32,
    pub shield: ShieldState,
    pub shield_health: u32,
}
