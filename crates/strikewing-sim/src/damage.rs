//! Damage application and destruction.
//!
//! Health only ever goes down through `take_damage`, and the `destroyed`
//! flag flips at most once. A boss with its shield up routes hits into the
//! shield pool before the hull sees anything.

use hecs::{Entity, World};

use strikewing_boss::{BossBrain, ShieldHit};
use strikewing_core::components::Hull;
use strikewing_core::enums::DamageOutcome;

/// Apply `amount` points of damage to `entity`.
///
/// Damage to an entity that is already destroyed, or that no longer exists,
/// is ignored.
pub fn take_damage(world: &mut World, entity: Entity, amount: u32) -> DamageOutcome {
    let Ok((hull, brain)) = world.query_one_mut::<(&mut Hull, Option<&mut BossBrain>)>(entity)
    else {
        return DamageOutcome::Ignored;
    };
    if hull.destroyed {
        return DamageOutcome::Ignored;
    }

    if let Some(brain) = brain {
        match brain.shield.absorb(amount) {
            Some(ShieldHit::Absorbed) => return DamageOutcome::Absorbed,
            Some(ShieldHit::Broken) => return DamageOutcome::ShieldBroken,
            None => {}
        }
    }

    hull.health = hull
        .health
        .saturating_sub(i32::try_from(amount).unwrap_or(i32::MAX));
    if hull.health <= 0 {
        hull.destroyed = true;
        DamageOutcome::Destroyed
    } else {
        DamageOutcome::Damaged
    }
}

/// Mark `entity` destroyed. Returns true only on the call that flipped the
/// flag; later calls have no effect.
pub fn destroy(world: &mut World, entity: Entity) -> bool {
    match world.get::<&mut Hull>(entity) {
        Ok(mut hull) if !hull.destroyed => {
            hull.destroyed = true;
            true
        }
        _ => false,
    }
}
