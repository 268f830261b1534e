//! Per-entity update dispatch, called from the registry traversal.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use strikewing_core::components::Actor;
use strikewing_core::enums::ActorKind;
use strikewing_core::events::SimEvent;

use crate::capabilities::SpawnQueue;
use crate::systems::{boss, fire_control, movement};

/// What an entity update may touch besides the world.
pub struct UpdateContext<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub spawns: &'a mut SpawnQueue,
    pub events: &'a mut Vec<SimEvent>,
}

/// Advance one entity by a tick according to its kind.
pub fn update_entity(world: &mut World, entity: Entity, ctx: &mut UpdateContext<'_>) {
    let Ok(kind) = world.get::<&Actor>(entity).map(|actor| actor.kind) else {
        return;
    };

    match kind {
        ActorKind::Enemy => {
            movement::advance(world, entity);
            fire(world, entity, ctx);
        }
        ActorKind::Boss => {
            boss::run(world, entity, ctx.rng, ctx.events);
            fire(world, entity, ctx);
        }
        ActorKind::StraightProjectile => movement::advance(world, entity),
        ActorKind::HomingProjectile => movement::steer_homing(world, entity),
        // The player moves from input before the traversal.
        ActorKind::Player => {}
    }
}

fn fire(world: &mut World, entity: Entity, ctx: &mut UpdateContext<'_>) {
    if let Some(request) = fire_control::fire_projectile(world, entity, ctx.rng) {
        ctx.spawns.push(request);
    }
}
