//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start moving in a direction until stopped.
    Move { direction: Direction },
    /// Stop movement along one axis.
    Stop { axis: Axis },
    /// Fire a shot (ignored while the weapon cools down).
    Fire,
    /// Abandon the current level and start it again.
    Restart,
}
