//! Tunable boss parameters.

use serde::{Deserialize, Serialize};

use strikewing_core::constants::*;
use strikewing_core::enums::ProjectileKind;
use strikewing_core::error::{check_health, check_probability, Result};

/// Everything that distinguishes one boss fight from another. Missing JSON
/// fields fall back to the stock boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BossProfile {
    pub health: i32,
    /// Per-tick probability of firing.
    pub fire_rate: f64,
    pub weapon: ProjectileKind,
    /// Per-tick probability of raising the shield while it is down.
    pub shield_probability: f64,
    pub shield_duration_frames: u32,
    /// Absorption pool of a freshly raised shield.
    pub shield_health: u32,
    pub shield_damage_per_hit: u32,
    pub vertical_velocity: i32,
    /// Copies of each move in the patrol pattern.
    pub moves_per_cycle: usize,
    pub max_frames_with_same_move: u32,
}

impl Default for BossProfile {
    fn default() -> Self {
        Self {
            health: BOSS_HEALTH,
            fire_rate: BOSS_FIRE_RATE,
            weapon: ProjectileKind::Straight,
            shield_probability: BOSS_SHIELD_PROBABILITY,
            shield_duration_frames: BOSS_SHIELD_DURATION_FRAMES,
            shield_health: BOSS_SHIELD_HEALTH,
            shield_damage_per_hit: BOSS_SHIELD_DAMAGE_PER_HIT,
            vertical_velocity: BOSS_VERTICAL_VELOCITY,
            moves_per_cycle: BOSS_MOVES_PER_CYCLE,
            max_frames_with_same_move: BOSS_MAX_FRAMES_WITH_SAME_MOVE,
        }
    }
}

impl BossProfile {
    /// Stock boss firing homing shots.
    pub fn homing() -> Self {
        Self {
            weapon: ProjectileKind::Homing,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_health("boss.health", self.health as i64)?;
        check_probability("boss.fire_rate", self.fire_rate)?;
        check_probability("boss.shield_probability", self.shield_probability)?;
        check_health("boss.shield_health", self.shield_health as i64)?;
        check_health(
            "boss.shield_damage_per_hit",
            self.shield_damage_per_hit as i64,
        )?;
        Ok(())
    }
}
