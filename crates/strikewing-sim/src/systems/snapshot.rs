//! Snapshot system: reads the registry and builds a `GameStateSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use strikewing_boss::BossBrain;
use strikewing_core::components::{Actor, Hull};
use strikewing_core::enums::*;
use strikewing_core::events::SimEvent;
use strikewing_core::state::*;
use strikewing_core::types::{Arena, Extent, Position, SimTime};

use crate::registry::EntityRegistry;

/// Level-wide values the snapshot reports alongside the entities.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub level_name: &'a str,
    pub phase: LevelPhase,
    pub arena: Arena,
    pub kill_count: u32,
    pub objective: Objective,
    pub player: Entity,
    pub boss: Option<Entity>,
}

pub fn build_snapshot(
    registry: &EntityRegistry,
    ctx: &SnapshotContext<'_>,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let world = registry.world();

    let kill_target = match ctx.objective {
        Objective::KillCount { target } => Some(target),
        Objective::DefeatBoss => None,
    };

    GameStateSnapshot {
        time: ctx.time,
        level_name: ctx.level_name.to_string(),
        phase: ctx.phase,
        arena: ctx.arena,
        kill_count: ctx.kill_count,
        kill_target,
        player: craft_view(world, ctx.player).unwrap_or_default(),
        enemies: registry
            .group(Group::Enemies)
            .iter()
            .filter_map(|&e| craft_view(world, e))
            .collect(),
        player_projectiles: projectile_views(world, registry.group(Group::PlayerProjectiles)),
        enemy_projectiles: projectile_views(world, registry.group(Group::EnemyProjectiles)),
        boss: ctx.boss.and_then(|boss| boss_view(world, boss)),
        events,
    }
}

fn craft_view(world: &World, entity: Entity) -> Option<CraftView> {
    let mut query = world
        .query_one::<(&Actor, &Position, &Extent, &Hull)>(entity)
        .ok()?;
    let (actor, pos, extent, hull) = query.get()?;
    Some(CraftView {
        id: entity.to_bits().get(),
        kind: actor.kind,
        position: *pos,
        extent: *extent,
        health: hull.health,
        max_health: hull.max_health,
    })
}

fn projectile_views(world: &World, members: &[Entity]) -> Vec<ProjectileView> {
    members
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(&Actor, &Position, &Extent)>(entity)
                .ok()?;
            let (actor, pos, extent) = query.get()?;
            Some(ProjectileView {
                id: entity.to_bits().get(),
                kind: actor.kind,
                position: *pos,
                extent: *extent,
            })
        })
        .collect()
}

/// The boss stays visible in the snapshot until it is reaped.
fn boss_view(world: &World, boss: Entity) -> Option<BossView> {
    let mut query = world.query_one::<(&Hull, &BossBrain)>(boss).ok()?;
    let (hull, brain) = query.get()?;
    Some(BossView {
        id: boss.to_bits().get(),
        health: hull.health,
        max_health: hull.max_health,
        shield: brain.shield.state(),
        shield_health: brain.shield.health(),
    })
}
