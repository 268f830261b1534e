//! Enemy spawn policy.
//!
//! Each tick, every free slot below the target head count gets one
//! Bernoulli trial at the spawn probability. A single pass therefore never
//! takes the group past the target, but the count can lag below it.

use rand::Rng;

use strikewing_core::enums::{ActorKind, Group};
use strikewing_core::events::SimEvent;
use strikewing_core::types::Arena;

use crate::levels::SpawnConfig;
use crate::registry::EntityRegistry;
use crate::world_setup;

/// Run one spawn pass. Returns how many enemies were created.
pub fn run<R: Rng + ?Sized>(
    registry: &mut EntityRegistry,
    rng: &mut R,
    arena: Arena,
    spawn: &SpawnConfig,
    events: &mut Vec<SimEvent>,
) -> usize {
    let current = registry.group(Group::Enemies).len();
    let target = spawn.target_enemies as usize;
    let mut spawned = 0;

    for _ in current..target {
        if rng.gen::<f64>() < spawn.spawn_probability {
            let (_, position) = world_setup::spawn_enemy(registry, rng, arena, spawn);
            events.push(SimEvent::EnemySpawned {
                kind: ActorKind::Enemy,
                position,
            });
            spawned += 1;
        }
    }

    if spawned > 0 {
        log::debug!("spawned {} enemies ({} on screen)", spawned, current + spawned);
    }
    spawned
}
