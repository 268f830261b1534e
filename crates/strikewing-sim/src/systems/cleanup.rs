//! Cleanup system: retires entities that have left the arena.

use hecs::Entity;

use strikewing_core::components::Hull;
use strikewing_core::enums::Group;
use strikewing_core::types::{Arena, Extent, Position};

use crate::damage::destroy;
use crate::registry::EntityRegistry;

/// Mark every group member lying entirely outside the arena as destroyed.
/// No kill is credited; the next reap removes them. Uses a pre-allocated
/// buffer to avoid per-tick allocation.
pub fn run(registry: &mut EntityRegistry, arena: Arena, buffer: &mut Vec<Entity>) -> usize {
    buffer.clear();
    let (world, groups) = registry.world_and_groups();

    for group in Group::ALL {
        for &entity in &groups[group.index()] {
            let Ok(mut query) = world.query_one::<(&Position, &Extent, &Hull)>(entity) else {
                continue;
            };
            if let Some((pos, extent, hull)) = query.get() {
                if !hull.destroyed && arena.is_outside(&extent.bounds_at(*pos)) {
                    buffer.push(entity);
                }
            }
        }
    }

    let mut retired = 0;
    for entity in buffer.drain(..) {
        if destroy(world, entity) {
            retired += 1;
        }
    }
    retired
}
