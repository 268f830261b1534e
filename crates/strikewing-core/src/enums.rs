//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The closed set of simulated entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Enemy,
    Boss,
    StraightProjectile,
    HomingProjectile,
}

impl ActorKind {
    /// Hostile craft whose destruction counts as a kill.
    pub fn is_enemy_craft(self) -> bool {
        matches!(self, ActorKind::Enemy | ActorKind::Boss)
    }

    pub fn is_projectile(self) -> bool {
        matches!(
            self,
            ActorKind::StraightProjectile | ActorKind::HomingProjectile
        )
    }
}

/// Registry collections. Traversal order is the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Enemies,
    PlayerProjectiles,
    EnemyProjectiles,
}

impl Group {
    pub const ALL: [Group; 3] = [
        Group::Enemies,
        Group::PlayerProjectiles,
        Group::EnemyProjectiles,
    ];

    pub fn index(self) -> usize {
        match self {
            Group::Enemies => 0,
            Group::PlayerProjectiles => 1,
            Group::EnemyProjectiles => 2,
        }
    }
}

/// How a craft's shots move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileKind {
    #[default]
    Straight,
    Homing,
}

/// Level lifecycle. `Won`, `Lost` and `Restarted` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelPhase {
    #[default]
    Running,
    Won,
    Lost,
    Restarted,
}

impl LevelPhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LevelPhase::Running)
    }
}

/// Symbolic transition reported to the level controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    AdvanceLevel,
    GameOver,
    Restart,
}

impl Transition {
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::AdvanceLevel => "advance-level",
            Transition::GameOver => "game-over",
            Transition::Restart => "restart",
        }
    }
}

/// Player steering input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Boss shield state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShieldState {
    #[default]
    Unshielded,
    Shielded,
}

/// What a level asks of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Objective {
    /// Destroy this many enemy craft.
    KillCount { target: u32 },
    /// Destroy the level's boss.
    DefeatBoss,
}

/// Result of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Target was already destroyed or no longer exists.
    Ignored,
    /// Shield absorbed the hit and is still up.
    Absorbed,
    /// Shield absorbed the hit and collapsed.
    ShieldBroken,
    /// Hull lost health and is still intact.
    Damaged,
    /// This hit destroyed the target.
    Destroyed,
}

/// Final state of a multi-level run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignOutcome {
    Complete,
    Defeated,
}
