//! Simulation constants and tuning parameters.
//!
//! Distances are in pixels and speeds in pixels per tick.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen ---

/// Reference screen width; resize ratios are computed against the current arena.
pub const ORIGINAL_SCREEN_WIDTH: f64 = 1350.0;

/// Reference screen height.
pub const ORIGINAL_SCREEN_HEIGHT: f64 = 750.0;

// --- Player ---

pub const PLAYER_WIDTH: f64 = 60.0;
pub const PLAYER_HEIGHT: f64 = 20.0;

/// Starting hull points on every level.
pub const PLAYER_INITIAL_HEALTH: i32 = 5;

/// Horizontal spawn offset from the left edge.
pub const PLAYER_START_X: f64 = 50.0;

/// Speed on each axis while a direction is held.
pub const PLAYER_SPEED: f64 = 8.0;

/// Ticks between two accepted fire commands.
pub const PLAYER_FIRE_COOLDOWN_TICKS: u32 = 6;

pub const PLAYER_PROJECTILE_WIDTH: f64 = 30.0;
pub const PLAYER_PROJECTILE_HEIGHT: f64 = 15.0;
pub const PLAYER_PROJECTILE_SPEED: f64 = 30.0;

// --- Enemy craft ---

pub const ENEMY_WIDTH: f64 = 90.0;
pub const ENEMY_HEIGHT: f64 = 50.0;

/// Leftward drift per tick.
pub const ENEMY_SPEED: f64 = 2.0;

/// Per-tick probability of an enemy firing.
pub const ENEMY_FIRE_RATE: f64 = 0.01;

pub const ENEMY_HEALTH: i32 = 1;

pub const ENEMY_PROJECTILE_WIDTH: f64 = 30.0;
pub const ENEMY_PROJECTILE_HEIGHT: f64 = 12.0;
pub const ENEMY_PROJECTILE_SPEED: f64 = 10.0;

// --- Boss ---

pub const BOSS_WIDTH: f64 = 150.0;
pub const BOSS_HEIGHT: f64 = 100.0;

/// Distance of the boss spawn point from the right edge.
pub const BOSS_RIGHT_MARGIN: f64 = 150.0;

pub const BOSS_HEALTH: i32 = 20;

/// Per-tick probability of the boss firing.
pub const BOSS_FIRE_RATE: f64 = 0.04;

/// Per-tick probability of an unshielded boss raising its shield.
pub const BOSS_SHIELD_PROBABILITY: f64 = 0.2;

/// Frames a raised shield stays up before it drops unconditionally.
pub const BOSS_SHIELD_DURATION_FRAMES: u32 = 500;

/// Absorption pool of a freshly raised shield.
pub const BOSS_SHIELD_HEALTH: u32 = 5;

/// Absorption consumed per hit while shielded.
pub const BOSS_SHIELD_DAMAGE_PER_HIT: u32 = 1;

/// Magnitude of each vertical move in the patrol pattern.
pub const BOSS_VERTICAL_VELOCITY: i32 = 8;

/// Copies of each of {+v, -v, 0} in the patrol pattern.
pub const BOSS_MOVES_PER_CYCLE: usize = 5;

/// Frames a pattern entry is held before the pattern is reshuffled.
pub const BOSS_MAX_FRAMES_WITH_SAME_MOVE: u32 = 10;

/// Upper patrol bound at the reference screen height (may be above the screen).
pub const BOSS_Y_UPPER_BOUND: f64 = -100.0;

/// Distance of the lower patrol bound from the bottom edge.
pub const BOSS_Y_LOWER_MARGIN: f64 = 100.0;

/// Vertical muzzle offset from the boss's top edge.
pub const BOSS_PROJECTILE_Y_OFFSET: f64 = 75.0;

pub const BOSS_PROJECTILE_WIDTH: f64 = 40.0;
pub const BOSS_PROJECTILE_HEIGHT: f64 = 40.0;
pub const BOSS_PROJECTILE_SPEED: f64 = 15.0;

// --- Homing fire ---

pub const HOMING_PROJECTILE_WIDTH: f64 = 50.0;
pub const HOMING_PROJECTILE_HEIGHT: f64 = 50.0;

/// Leftward speed of a homing projectile.
pub const HOMING_PROJECTILE_SPEED: f64 = 8.0;

/// Maximum vertical correction per tick toward the target.
pub const HOMING_TRACKING_SPEED: f64 = 0.5;

// --- Levels ---

/// Enemies kept on screen during the first level.
pub const LEVEL_ONE_TOTAL_ENEMIES: u32 = 5;

/// Kills needed to clear the first level.
pub const LEVEL_ONE_KILLS_TO_ADVANCE: u32 = 10;

/// Per-slot probability of an enemy spawning during the first level.
pub const LEVEL_ONE_SPAWN_PROBABILITY: f64 = 0.20;

/// Damage dealt by one collision.
pub const COLLISION_DAMAGE: u32 = 1;
