//! Boss system: patrol step and shield cycle.

use hecs::{Entity, World};
use rand::Rng;

use strikewing_boss::{BossBrain, ShieldChange};
use strikewing_core::events::SimEvent;
use strikewing_core::types::Position;

/// Run one boss frame: move within the patrol band, then update the shield.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    entity: Entity,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
) {
    let Ok((pos, brain)) = world.query_one_mut::<(&mut Position, &mut BossBrain)>(entity) else {
        return;
    };
    let step = brain.step(pos.y, rng);
    pos.y = step.y;

    match step.shield {
        Some(ShieldChange::Raised) => events.push(SimEvent::ShieldRaised),
        Some(ShieldChange::Expired) => events.push(SimEvent::ShieldExpired),
        None => {}
    }
}
