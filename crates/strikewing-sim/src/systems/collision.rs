//! Collision resolution between two entity groups.
//!
//! Every ordered pair `(a, b)` is tested for bounding-box contact. On
//! contact both sides take one point of damage, and a kill is credited when
//! that hit destroyed `b` and `b` is an enemy craft. There is no early exit:
//! an entity touching several opposing entities takes a hit from each of
//! them in the same pass. Pairs where either side is already destroyed are
//! skipped, so a spent projectile cannot hit twice.
//!
//! Complexity is O(|A|·|B|), which is fine at the entity counts a level
//! produces.

use hecs::{Entity, World};

use strikewing_core::components::{Actor, Hull};
use strikewing_core::constants::COLLISION_DAMAGE;
use strikewing_core::enums::{ActorKind, DamageOutcome};
use strikewing_core::events::SimEvent;
use strikewing_core::types::{BoundingBox, Extent, Position};

use crate::capabilities::KillTally;
use crate::damage::take_damage;

/// One resolved contact and what each side suffered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub a: Entity,
    pub b: Entity,
    pub a_outcome: DamageOutcome,
    pub b_outcome: DamageOutcome,
}

/// Resolve all contacts between `group_a` and `group_b`.
pub fn resolve(
    world: &mut World,
    group_a: &[Entity],
    group_b: &[Entity],
    tally: &mut KillTally,
    events: &mut Vec<SimEvent>,
) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for &a in group_a {
        for &b in group_b {
            let (Some(a_box), Some(b_box)) = (live_bounds(world, a), live_bounds(world, b)) else {
                continue;
            };
            if !a_box.intersects(&b_box) {
                continue;
            }

            let a_outcome = take_damage(world, a, COLLISION_DAMAGE);
            let b_outcome = take_damage(world, b, COLLISION_DAMAGE);
            report(world, a, a_outcome, events);
            report(world, b, b_outcome, events);

            if b_outcome == DamageOutcome::Destroyed {
                if let Some(kind) = kind_of(world, b).filter(|k| k.is_enemy_craft()) {
                    tally.record(kind);
                    log::debug!("{:?} destroyed, kills={}", kind, tally.kills);
                }
            }

            contacts.push(Contact {
                a,
                b,
                a_outcome,
                b_outcome,
            });
        }
    }
    contacts
}

/// Bounding box of an entity that can still collide.
fn live_bounds(world: &World, entity: Entity) -> Option<BoundingBox> {
    let mut query = world
        .query_one::<(&Position, &Extent, &Hull)>(entity)
        .ok()?;
    let (pos, extent, hull) = query.get()?;
    (!hull.destroyed).then(|| extent.bounds_at(*pos))
}

fn kind_of(world: &World, entity: Entity) -> Option<ActorKind> {
    world.get::<&Actor>(entity).ok().map(|actor| actor.kind)
}

/// Translate a damage outcome into feedback events.
fn report(world: &World, entity: Entity, outcome: DamageOutcome, events: &mut Vec<SimEvent>) {
    let Some(kind) = kind_of(world, entity) else {
        return;
    };

    match outcome {
        DamageOutcome::ShieldBroken => events.push(SimEvent::ShieldBroken),
        DamageOutcome::Damaged | DamageOutcome::Destroyed if kind == ActorKind::Player => {
            let remaining_health = world
                .get::<&Hull>(entity)
                .map(|hull| hull.health)
                .unwrap_or(0);
            events.push(SimEvent::PlayerHit { remaining_health });
            if outcome == DamageOutcome::Destroyed {
                push_destroyed(world, entity, kind, events);
            }
        }
        DamageOutcome::Destroyed if !kind.is_projectile() => {
            push_destroyed(world, entity, kind, events);
        }
        _ => {}
    }
}

fn push_destroyed(world: &World, entity: Entity, kind: ActorKind, events: &mut Vec<SimEvent>) {
    let position = world
        .get::<&Position>(entity)
        .map(|pos| *pos)
        .unwrap_or_default();
    events.push(SimEvent::CraftDestroyed { kind, position });
}
