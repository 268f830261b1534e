//! Boss behavior for STRIKEWING.
//!
//! Implements the boss's shield state machine, its shuffled vertical patrol
//! pattern and the tunable profile both are built from. No ECS dependency:
//! everything here operates on plain data with the RNG passed in.

pub mod brain;
pub mod pattern;
pub mod profiles;
pub mod shield;

pub use brain::{BossBrain, BossStep};
pub use pattern::{MovementPattern, PatrolBand};
pub use profiles::BossProfile;
pub use shield::{ShieldChange, ShieldController, ShieldHit};

pub use strikewing_core as core;

#[cfg(test)]
mod tests;
