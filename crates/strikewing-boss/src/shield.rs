//! Shield state machine.
//!
//! `Unshielded -> Shielded` on a per-tick Bernoulli trial. A raised shield
//! counts frames and drops when the count reaches the duration, whether or
//! not it absorbed anything. Each activation refills the absorption pool.
//! A pool drained to zero drops the shield immediately.

use rand::Rng;

use strikewing_core::enums::ShieldState;

use crate::profiles::BossProfile;

/// State change produced by one shield update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldChange {
    Raised,
    Expired,
}

/// Result of routing one hit through a raised shield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldHit {
    /// The pool took the hit and the shield holds.
    Absorbed,
    /// The pool took the hit and is now empty; the shield is down.
    Broken,
}

#[derive(Debug, Clone)]
pub struct ShieldController {
    state: ShieldState,
    frames: u32,
    health: u32,
    activation_probability: f64,
    duration_frames: u32,
    capacity: u32,
    damage_per_hit: u32,
}

impl ShieldController {
    pub fn new(profile: &BossProfile) -> Self {
        Self {
            state: ShieldState::Unshielded,
            frames: 0,
            health: 0,
            activation_probability: profile.shield_probability,
            duration_frames: profile.shield_duration_frames,
            capacity: profile.shield_health,
            damage_per_hit: profile.shield_damage_per_hit,
        }
    }

    /// Advance one frame.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ShieldChange> {
        let mut change = None;
        match self.state {
            ShieldState::Shielded => self.frames += 1,
            ShieldState::Unshielded => {
                if rng.gen::<f64>() < self.activation_probability {
                    self.raise();
                    change = Some(ShieldChange::Raised);
                }
            }
        }

        if self.is_active() && self.frames >= self.duration_frames {
            self.drop_shield();
            change = Some(ShieldChange::Expired);
        }
        change
    }

    /// Raise the shield with a full pool.
    pub fn raise(&mut self) {
        self.state = ShieldState::Shielded;
        self.frames = 0;
        self.health = self.capacity;
    }

    /// Route `hits` worth of damage into the pool. `None` means the shield is
    /// down and the damage belongs to the hull.
    pub fn absorb(&mut self, hits: u32) -> Option<ShieldHit> {
        if !self.is_active() {
            return None;
        }
        self.health = self
            .health
            .saturating_sub(self.damage_per_hit.saturating_mul(hits));
        if self.health == 0 {
            self.drop_shield();
            Some(ShieldHit::Broken)
        } else {
            Some(ShieldHit::Absorbed)
        }
    }

    fn drop_shield(&mut self) {
        self.state = ShieldState::Unshielded;
        self.frames = 0;
        self.health = 0;
    }

    pub fn is_active(&self) -> bool {
        self.state == ShieldState::Shielded
    }

    pub fn state(&self) -> ShieldState {
        self.state
    }

    /// Frames the current shield has been up.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Remaining absorption.
    pub fn health(&self) -> u32 {
        self.health
    }
}
