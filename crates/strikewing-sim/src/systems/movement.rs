//! Kinematics: straight-line drift, homing steering and player steering.
//!
//! Velocities are in pixels per tick, so integration is a plain add.

use hecs::{Entity, World};

use strikewing_core::components::{Hull, PlayerControl};
use strikewing_core::constants::{HOMING_TRACKING_SPEED, PLAYER_SPEED};
use strikewing_core::types::{Arena, Extent, Position, Velocity};

use crate::components::Homing;

/// Translate an entity by its velocity.
pub fn advance(world: &mut World, entity: Entity) {
    if let Ok((pos, vel)) = world.query_one_mut::<(&mut Position, &Velocity)>(entity) {
        *pos = pos.advanced(*vel);
    }
}

/// Steer a homing projectile toward its target's vertical centre, then move.
///
/// The horizontal component never changes. Once the target is destroyed or
/// gone the projectile keeps its last heading.
pub fn steer_homing(world: &mut World, entity: Entity) {
    let Ok(homing) = world.get::<&Homing>(entity).map(|h| *h) else {
        return;
    };
    let Ok(own_center) = centre_y(world, entity) else {
        return;
    };

    let mut heading = homing.heading;
    if let Some(target) = homing.target.filter(|&t| is_live(world, t)) {
        if let Ok(target_center) = centre_y(world, target) {
            heading.y = (target_center - own_center)
                .clamp(-HOMING_TRACKING_SPEED, HOMING_TRACKING_SPEED);
        }
    }

    if let Ok((pos, homing)) = world.query_one_mut::<(&mut Position, &mut Homing)>(entity) {
        homing.heading = heading;
        *pos = pos.advanced(heading);
    }
}

fn is_live(world: &World, entity: Entity) -> bool {
    world
        .get::<&Hull>(entity)
        .map(|hull| !hull.destroyed)
        .unwrap_or(false)
}

fn centre_y(world: &World, entity: Entity) -> Result<f64, hecs::ComponentError> {
    let pos = *world.get::<&Position>(entity)?;
    let extent = *world.get::<&Extent>(entity)?;
    Ok(extent.bounds_at(pos).center_y())
}

/// Apply held steering input to the player and keep it inside the arena.
/// Also counts down the fire cooldown.
pub fn move_player(world: &mut World, player: Entity, arena: Arena) {
    if let Ok((pos, extent, control)) =
        world.query_one_mut::<(&mut Position, &Extent, &mut PlayerControl)>(player)
    {
        let step = Velocity::new(
            f64::from(control.horizontal) * PLAYER_SPEED,
            f64::from(control.vertical) * PLAYER_SPEED,
        );
        *pos = arena.clamp(pos.advanced(step), *extent);
        control.fire_cooldown = control.fire_cooldown.saturating_sub(1);
    }
}
