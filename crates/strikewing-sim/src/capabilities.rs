//! Capabilities handed to crafts instead of references to the level.
//!
//! A craft asks for a projectile by pushing onto the `SpawnQueue`; the level
//! materialises the queue after the update traversal. Kills are reported to
//! the `KillTally`.

use strikewing_core::enums::{ActorKind, ProjectileKind};
use strikewing_core::types::Position;

/// A projectile some craft wants launched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub shooter: ActorKind,
    pub weapon: ProjectileKind,
    /// Top-left corner of the new projectile.
    pub origin: Position,
}

#[derive(Debug, Default)]
pub struct SpawnQueue {
    requests: Vec<SpawnRequest>,
}

impl SpawnQueue {
    pub fn push(&mut self, request: SpawnRequest) {
        self.requests.push(request);
    }

    /// Take every pending request in submission order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SpawnRequest> {
        self.requests.drain(..)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

/// Player's kill record for the current level.
#[derive(Debug, Default, Clone, Copy)]
pub struct KillTally {
    pub kills: u32,
    pub boss_defeated: bool,
}

impl KillTally {
    pub fn record(&mut self, kind: ActorKind) {
        self.kills += 1;
        if kind == ActorKind::Boss {
            self.boss_defeated = true;
        }
    }
}
