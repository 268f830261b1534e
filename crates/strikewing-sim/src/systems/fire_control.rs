//! Weapon gating for every craft.
//!
//! Hostile craft fire on a per-tick Bernoulli trial; the player fires on
//! command, limited by a cooldown. Both return a spawn request rather than
//! touching the registry, so they are safe to call mid-traversal.

use hecs::{Entity, World};
use rand::Rng;

use strikewing_core::components::{Actor, FireControl, PlayerControl};
use strikewing_core::constants::PLAYER_FIRE_COOLDOWN_TICKS;
use strikewing_core::enums::ProjectileKind;
use strikewing_core::types::{Extent, Position};

use crate::capabilities::SpawnRequest;
use crate::world_setup::muzzle;

/// Roll the craft's fire trial: fire iff `uniform[0, 1) < fire_rate`.
///
/// The roll happens once per call whatever the rate, so a craft with a rate
/// of 0 still advances the RNG.
pub fn fire_projectile<R: Rng + ?Sized>(
    world: &World,
    entity: Entity,
    rng: &mut R,
) -> Option<SpawnRequest> {
    let mut query = world
        .query_one::<(&Actor, &FireControl, &Position, &Extent)>(entity)
        .ok()?;
    let (actor, fire, pos, extent) = query.get()?;

    if rng.gen::<f64>() >= fire.fire_rate {
        return None;
    }
    Some(SpawnRequest {
        shooter: actor.kind,
        weapon: fire.weapon,
        origin: muzzle(actor.kind, fire.weapon, *pos, *extent),
    })
}

/// Fire the player's gun unless it is still cooling down.
pub fn player_fire(world: &mut World, player: Entity) -> Option<SpawnRequest> {
    let (actor, pos, extent, control) = world
        .query_one_mut::<(&Actor, &Position, &Extent, &mut PlayerControl)>(player)
        .ok()?;
    if control.fire_cooldown > 0 {
        return None;
    }
    control.fire_cooldown = PLAYER_FIRE_COOLDOWN_TICKS;
    Some(SpawnRequest {
        shooter: actor.kind,
        weapon: ProjectileKind::Straight,
        origin: muzzle(actor.kind, ProjectileKind::Straight, *pos, *extent),
    })
}
