//! Per-boss controller state, stored as a component on the boss entity.

use rand::Rng;

use crate::pattern::{MovementPattern, PatrolBand};
use crate::profiles::BossProfile;
use crate::shield::{ShieldChange, ShieldController};

#[derive(Debug, Clone)]
pub struct BossBrain {
    pub pattern: MovementPattern,
    pub shield: ShieldController,
    pub band: PatrolBand,
}

/// Outcome of one boss frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossStep {
    /// New top-edge y, already bounced back if the move left the band.
    pub y: f64,
    pub shield: Option<ShieldChange>,
}

impl BossBrain {
    pub fn new<R: Rng + ?Sized>(profile: &BossProfile, band: PatrolBand, rng: &mut R) -> Self {
        Self {
            pattern: MovementPattern::new(
                profile.vertical_velocity,
                profile.moves_per_cycle,
                profile.max_frames_with_same_move,
                rng,
            ),
            shield: ShieldController::new(profile),
            band,
        }
    }

    /// Move first, then update the shield.
    pub fn step<R: Rng + ?Sized>(&mut self, y: f64, rng: &mut R) -> BossStep {
        let dy = self.pattern.next_move(rng) as f64;
        let y = self.band.step(y, dy);
        let shield = self.shield.update(rng);
        if let Some(change) = shield {
            log::debug!("boss shield {:?} at y={:.1}", change, y);
        }
        BossStep { y, shield }
    }
}
