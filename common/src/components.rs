#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared Components
// ============================================================================

// World position in meters. Y is up; the maze extends in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Component)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    // Horizontal (XZ-plane) distance to another position.
    #[must_use]
    pub fn distance_xz(&self, other: &Self) -> f32 {
        (self.x - other.x).hypot(self.z - other.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_xz_ignores_height() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 17.0, 4.0);
        assert!((a.distance_xz(&b) - 5.0).abs() < 1e-6);
    }
}
