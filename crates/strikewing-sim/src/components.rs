//! Simulation-only components that hold entity handles.

use hecs::Entity;

use strikewing_core::types::Velocity;

/// Steering state of a homing projectile.
#[derive(Debug, Clone, Copy)]
pub struct Homing {
    /// Craft being tracked. The handle may dangle once the target is reaped.
    pub target: Option<Entity>,
    /// Last applied velocity, kept when the target is gone.
    pub heading: Velocity,
}
