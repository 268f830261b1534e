//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in screen space (pixels). Anchored at the top-left corner
/// of the entity; y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in pixels per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Fixed size of an entity's collision footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned bounding box derived from a position and an extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// The playable area reported by the external geometry collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by a velocity for one tick.
    pub fn advanced(&self, velocity: Velocity) -> Self {
        Self::new(self.x + velocity.x, self.y + velocity.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bounding box of an entity of this extent placed at `position`.
    pub fn bounds_at(&self, position: Position) -> BoundingBox {
        BoundingBox {
            min_x: position.x,
            min_y: position.y,
            max_x: position.x + self.width,
            max_y: position.y + self.height,
        }
    }
}

impl BoundingBox {
    /// Closed-interval overlap test: boxes sharing an edge intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: crate::constants::ORIGINAL_SCREEN_WIDTH,
            height: crate::constants::ORIGINAL_SCREEN_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Fail with `InvalidBounds` unless both sides are positive and finite.
    pub fn validate(&self) -> crate::error::Result<()> {
        let Self { width, height } = *self;
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(crate::error::SimError::InvalidBounds { width, height })
        }
    }

    /// Whether a box lies entirely outside the arena.
    pub fn is_outside(&self, bounds: &BoundingBox) -> bool {
        bounds.min_x > self.width
            || bounds.max_x < 0.0
            || bounds.min_y > self.height
            || bounds.max_y < 0.0
    }

    /// Clamp a top-left position so an entity of `extent` stays fully inside.
    pub fn clamp(&self, position: Position, extent: Extent) -> Position {
        let max_x = (self.width - extent.width).max(0.0);
        let max_y = (self.height - extent.height).max(0.0);
        Position::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
