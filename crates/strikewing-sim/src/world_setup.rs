//! Entity spawn factories.
//!
//! Creates the player, enemy craft, the boss and projectiles with the
//! component bundles the systems expect.

use hecs::{Entity, World};
use rand::Rng;

use strikewing_boss::{BossBrain, BossProfile, PatrolBand};
use strikewing_core::components::*;
use strikewing_core::constants::*;
use strikewing_core::enums::*;
use strikewing_core::types::{Arena, Extent, Position, Velocity};

use crate::capabilities::SpawnRequest;
use crate::components::Homing;
use crate::levels::SpawnConfig;
use crate::registry::EntityRegistry;

/// Spawn the player craft at the left edge, vertically centred. The player
/// belongs to no group.
pub fn spawn_player(world: &mut World, arena: Arena, health: i32) -> Entity {
    let extent = Extent::new(PLAYER_WIDTH, PLAYER_HEIGHT);
    let position = arena.clamp(
        Position::new(PLAYER_START_X, arena.height / 2.0 - PLAYER_HEIGHT / 2.0),
        extent,
    );
    world.spawn((
        Actor {
            kind: ActorKind::Player,
        },
        position,
        extent,
        Hull::new(health),
        PlayerControl::default(),
    ))
}

/// Spawn an enemy at the right edge at a random height.
pub fn spawn_enemy<R: Rng + ?Sized>(
    registry: &mut EntityRegistry,
    rng: &mut R,
    arena: Arena,
    spawn: &SpawnConfig,
) -> (Entity, Position) {
    let max_y = (arena.height - ENEMY_HEIGHT).max(0.0);
    let y = if max_y > 0.0 {
        rng.gen_range(0.0..max_y)
    } else {
        0.0
    };
    let position = Position::new(arena.width, y);
    let entity = registry.spawn(
        (
            Actor {
                kind: ActorKind::Enemy,
            },
            position,
            Extent::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            Velocity::new(-ENEMY_SPEED, 0.0),
            Hull::new(spawn.enemy_health),
            FireControl {
                fire_rate: spawn.enemy_fire_rate,
                weapon: spawn.enemy_weapon,
            },
        ),
        Group::Enemies,
    );
    (entity, position)
}

/// Spawn the boss near the right edge, centred inside its patrol band.
pub fn spawn_boss<R: Rng + ?Sized>(
    registry: &mut EntityRegistry,
    rng: &mut R,
    arena: Arena,
    profile: &BossProfile,
) -> (Entity, Position) {
    let band = PatrolBand::for_height(arena.height);
    let position = Position::new(
        arena.width - BOSS_RIGHT_MARGIN,
        band.clamp(arena.height / 2.0),
    );
    let brain = BossBrain::new(profile, band, rng);
    let entity = registry.spawn(
        (
            Actor {
                kind: ActorKind::Boss,
            },
            position,
            Extent::new(BOSS_WIDTH, BOSS_HEIGHT),
            Hull::new(profile.health),
            FireControl {
                fire_rate: profile.fire_rate,
                weapon: profile.weapon,
            },
            brain,
        ),
        Group::Enemies,
    );
    (entity, position)
}

/// Size of the projectile a shooter launches with a weapon.
pub fn projectile_extent(shooter: ActorKind, weapon: ProjectileKind) -> Extent {
    match (shooter, weapon) {
        (ActorKind::Player, _) => Extent::new(PLAYER_PROJECTILE_WIDTH, PLAYER_PROJECTILE_HEIGHT),
        (_, ProjectileKind::Homing) => {
            Extent::new(HOMING_PROJECTILE_WIDTH, HOMING_PROJECTILE_HEIGHT)
        }
        (ActorKind::Boss, ProjectileKind::Straight) => {
            Extent::new(BOSS_PROJECTILE_WIDTH, BOSS_PROJECTILE_HEIGHT)
        }
        _ => Extent::new(ENEMY_PROJECTILE_WIDTH, ENEMY_PROJECTILE_HEIGHT),
    }
}

/// Where a shooter's projectile appears. Player shots leave the nose;
/// hostile shots leave the left edge.
pub fn muzzle(
    shooter: ActorKind,
    weapon: ProjectileKind,
    position: Position,
    extent: Extent,
) -> Position {
    let shot = projectile_extent(shooter, weapon);
    match shooter {
        ActorKind::Player => Position::new(
            position.x + extent.width,
            position.y + extent.height / 2.0 - shot.height / 2.0,
        ),
        ActorKind::Boss => Position::new(
            position.x - shot.width,
            position.y + BOSS_PROJECTILE_Y_OFFSET - shot.height / 2.0,
        ),
        _ => Position::new(
            position.x - shot.width,
            position.y + extent.height / 2.0 - shot.height / 2.0,
        ),
    }
}

/// Materialise a queued projectile. Homing shots lock onto `target`.
pub fn spawn_projectile(
    registry: &mut EntityRegistry,
    request: &SpawnRequest,
    target: Option<Entity>,
) -> Entity {
    let extent = projectile_extent(request.shooter, request.weapon);

    if request.shooter == ActorKind::Player {
        return registry.spawn(
            (
                Actor {
                    kind: ActorKind::StraightProjectile,
                },
                request.origin,
                extent,
                Velocity::new(PLAYER_PROJECTILE_SPEED, 0.0),
                Hull::new(1),
            ),
            Group::PlayerProjectiles,
        );
    }

    match request.weapon {
        ProjectileKind::Homing => registry.spawn(
            (
                Actor {
                    kind: ActorKind::HomingProjectile,
                },
                request.origin,
                extent,
                Hull::new(1),
                Homing {
                    target,
                    heading: Velocity::new(-HOMING_PROJECTILE_SPEED, 0.0),
                },
            ),
            Group::EnemyProjectiles,
        ),
        ProjectileKind::Straight => {
            let speed = if request.shooter == ActorKind::Boss {
                BOSS_PROJECTILE_SPEED
            } else {
                ENEMY_PROJECTILE_SPEED
            };
            registry.spawn(
                (
                    Actor {
                        kind: ActorKind::StraightProjectile,
                    },
                    request.origin,
                    extent,
                    Velocity::new(-speed, 0.0),
                    Hull::new(1),
                ),
                Group::EnemyProjectiles,
            )
        }
    }
}
