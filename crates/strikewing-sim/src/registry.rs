//! Entity registry: owns the ECS world and the three ordered entity groups.
//!
//! Every simulated entity apart from the player lives in exactly one group.
//! Removing an entity from its group also despawns it, so nothing outlives
//! its registry membership. Observers are told about every add and remove.

use hecs::{DynamicBundle, Entity, World};

use strikewing_core::components::Hull;
use strikewing_core::enums::Group;

/// Observer hook fired on group membership changes.
pub type Listener = Box<dyn FnMut(Entity, Group)>;

pub struct EntityRegistry {
    world: World,
    groups: [Vec<Entity>; 3],
    added_listeners: Vec<Listener>,
    removed_listeners: Vec<Listener>,
    despawn_buffer: Vec<Entity>,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            groups: [Vec::new(), Vec::new(), Vec::new()],
            added_listeners: Vec::new(),
            removed_listeners: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Register a callback for every entity added to a group.
    pub fn on_entity_added(&mut self, listener: impl FnMut(Entity, Group) + 'static) {
        self.added_listeners.push(Box::new(listener));
    }

    /// Register a callback for every entity removed from a group.
    pub fn on_entity_removed(&mut self, listener: impl FnMut(Entity, Group) + 'static) {
        self.removed_listeners.push(Box::new(listener));
    }

    /// Spawn a bundle into the world and append it to `group`.
    pub fn spawn(&mut self, bundle: impl DynamicBundle, group: Group) -> Entity {
        let entity = self.world.spawn(bundle);
        self.add(entity, group);
        entity
    }

    /// Append `entity` to `group`. Returns false (and signals nothing) if it
    /// is already a member or no longer exists.
    pub fn add(&mut self, entity: Entity, group: Group) -> bool {
        if !self.world.contains(entity) || self.groups[group.index()].contains(&entity) {
            return false;
        }
        self.groups[group.index()].push(entity);
        for listener in &mut self.added_listeners {
            listener(entity, group);
        }
        true
    }

    /// Remove `entity` from `group` and despawn it. Returns false if it was
    /// not a member.
    pub fn remove(&mut self, entity: Entity, group: Group) -> bool {
        let members = &mut self.groups[group.index()];
        let Some(index) = members.iter().position(|&e| e == entity) else {
            return false;
        };
        members.remove(index);
        for listener in &mut self.removed_listeners {
            listener(entity, group);
        }
        let _ = self.world.despawn(entity);
        true
    }

    /// Call `update` on every live member of every group, enemies first,
    /// then player projectiles, then enemy projectiles, each in insertion
    /// order. The callback only sees the world, so groups cannot change
    /// during the traversal; entities already destroyed are skipped.
    pub fn update_all<F>(&mut self, mut update: F)
    where
        F: FnMut(&mut World, Entity, Group),
    {
        for group in Group::ALL {
            let members = &self.groups[group.index()];
            for &entity in members {
                if is_destroyed(&self.world, entity) {
                    continue;
                }
                update(&mut self.world, entity, group);
            }
        }
    }

    /// Remove and despawn every destroyed member of every group. Returns how
    /// many entities were reaped.
    pub fn reap_destroyed(&mut self) -> usize {
        let mut reaped = 0;
        for group in Group::ALL {
            self.despawn_buffer.clear();
            let world = &self.world;
            let buffer = &mut self.despawn_buffer;
            self.groups[group.index()].retain(|&entity| {
                if is_destroyed(world, entity) {
                    buffer.push(entity);
                    false
                } else {
                    true
                }
            });

            for &entity in &self.despawn_buffer {
                for listener in &mut self.removed_listeners {
                    listener(entity, group);
                }
            }
            reaped += self.despawn_buffer.len();
            for entity in self.despawn_buffer.drain(..) {
                let _ = self.world.despawn(entity);
            }
        }
        reaped
    }

    /// Empty every group, signalling and despawning each member.
    pub fn clear(&mut self) {
        for group in Group::ALL {
            let members = std::mem::take(&mut self.groups[group.index()]);
            for entity in members {
                for listener in &mut self.removed_listeners {
                    listener(entity, group);
                }
                let _ = self.world.despawn(entity);
            }
        }
    }

    pub fn group(&self, group: Group) -> &[Entity] {
        &self.groups[group.index()]
    }

    pub fn contains(&self, entity: Entity, group: Group) -> bool {
        self.groups[group.index()].contains(&entity)
    }

    /// Total members across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access. Entities spawned directly through this handle
    /// are not group members and are never reaped.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Split borrow for passes that damage entities while reading the groups.
    pub fn world_and_groups(&mut self) -> (&mut World, &[Vec<Entity>; 3]) {
        (&mut self.world, &self.groups)
    }
}

/// An entity counts as destroyed once its hull says so or once it has left
/// the world.
pub fn is_destroyed(world: &World, entity: Entity) -> bool {
    world
        .get::<&Hull>(entity)
        .map(|hull| hull.destroyed)
        .unwrap_or(true)
}
