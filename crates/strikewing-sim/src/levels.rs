//! Level catalogue and campaign configuration.
//!
//! A level is plain data: the player's starting health, what has to be done
//! to clear it, an optional enemy spawn policy and an optional boss. The
//! stock campaign is three levels; a JSON campaign can replace it.

use serde::{Deserialize, Serialize};

use strikewing_boss::BossProfile;
use strikewing_core::constants::*;
use strikewing_core::enums::{Objective, ProjectileKind};
use strikewing_core::error::{check_health, check_probability, Result, SimError};

/// Probabilistic enemy spawning up to a target head count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Enemies the policy tries to keep on screen.
    pub target_enemies: u32,
    /// Per-slot probability of spawning in one tick.
    pub spawn_probability: f64,
    pub enemy_health: i32,
    pub enemy_fire_rate: f64,
    pub enemy_weapon: ProjectileKind,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            target_enemies: LEVEL_ONE_TOTAL_ENEMIES,
            spawn_probability: LEVEL_ONE_SPAWN_PROBABILITY,
            enemy_health: ENEMY_HEALTH,
            enemy_fire_rate: ENEMY_FIRE_RATE,
            enemy_weapon: ProjectileKind::Straight,
        }
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<()> {
        check_probability("spawn.spawn_probability", self.spawn_probability)?;
        check_probability("spawn.enemy_fire_rate", self.enemy_fire_rate)?;
        check_health("spawn.enemy_health", self.enemy_health as i64)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    #[serde(default = "default_player_health")]
    pub player_health: i32,
    pub objective: Objective,
    #[serde(default)]
    pub spawn: Option<SpawnConfig>,
    #[serde(default)]
    pub boss: Option<BossProfile>,
}

fn default_player_health() -> i32 {
    PLAYER_INITIAL_HEALTH
}

impl LevelConfig {
    /// Waves of drifting enemies; ten kills to clear.
    pub fn level_one() -> Self {
        Self {
            name: "Level 1".into(),
            player_health: PLAYER_INITIAL_HEALTH,
            objective: Objective::KillCount {
                target: LEVEL_ONE_KILLS_TO_ADVANCE,
            },
            spawn: Some(SpawnConfig::default()),
            boss: None,
        }
    }

    /// Boss fight with straight fireballs.
    pub fn level_two() -> Self {
        Self {
            name: "Level 2".into(),
            player_health: PLAYER_INITIAL_HEALTH,
            objective: Objective::DefeatBoss,
            spawn: None,
            boss: Some(BossProfile::default()),
        }
    }

    /// Boss fight with homing fireballs.
    pub fn level_three() -> Self {
        Self {
            name: "Level 3".into(),
            player_health: PLAYER_INITIAL_HEALTH,
            objective: Objective::DefeatBoss,
            spawn: None,
            boss: Some(BossProfile::homing()),
        }
    }

    /// Reject levels that would start finished or could never be cleared.
    pub fn validate(&self) -> Result<()> {
        check_health("player_health", self.player_health as i64)?;
        if let Some(spawn) = &self.spawn {
            spawn.validate()?;
        }
        if let Some(boss) = &self.boss {
            boss.validate()?;
        }

        match self.objective {
            Objective::KillCount { target } => {
                if target == 0 {
                    return Err(SimError::InvalidTarget {
                        field: "objective.target",
                    });
                }
                let spawns_enemies = self
                    .spawn
                    .as_ref()
                    .is_some_and(|spawn| spawn.target_enemies > 0 && spawn.spawn_probability > 0.0);
                if !spawns_enemies && self.boss.is_none() {
                    return Err(SimError::InvalidTarget { field: "spawn" });
                }
            }
            Objective::DefeatBoss => {
                if self.boss.is_none() {
                    return Err(SimError::InvalidTarget { field: "boss" });
                }
            }
        }
        Ok(())
    }
}

/// Ordered list of levels plus the seed the run starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub levels: Vec<LevelConfig>,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl Default for CampaignConfig {
    fn default() -> Self {
        default_campaign()
    }
}

impl CampaignConfig {
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(SimError::EmptyCampaign);
        }
        for level in &self.levels {
            level.validate()?;
        }
        Ok(())
    }

    pub fn level(&self, index: usize) -> Result<&LevelConfig> {
        self.levels
            .get(index)
            .ok_or(SimError::UnknownLevel { index })
    }
}

/// The stock three-level campaign.
pub fn default_campaign() -> CampaignConfig {
    CampaignConfig {
        levels: vec![
            LevelConfig::level_one(),
            LevelConfig::level_two(),
            LevelConfig::level_three(),
        ],
        seed: default_seed(),
    }
}
