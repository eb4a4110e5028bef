#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{components::Position, constants::DEDUP_SCALE};

// ============================================================================
// Placement Records
// ============================================================================

// Which grid boundary a wall piece sits on. North/south boundaries share one
// yaw; east/west boundaries are rotated a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum WallOrientation {
    NorthSouth,
    EastWest,
}

impl WallOrientation {
    // Instance yaw in radians.
    #[must_use]
    pub const fn yaw(self) -> f32 {
        match self {
            Self::NorthSouth => 0.0,
            Self::EastWest => std::f32::consts::FRAC_PI_2,
        }
    }
}

// One placed floor tile. `asset` indexes the floor pool used that pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct FloorTile {
    pub grid_x: i32,
    pub grid_z: i32,
    pub position: Position,
    pub asset: usize,
}

// One placed wall piece.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct WallPiece {
    pub position: Position,
    pub orientation: WallOrientation,
    pub asset: usize,
}

// One placed decoration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct DecorPiece {
    pub position: Position,
    pub yaw: f32,
    pub scale: f32,
    pub asset: usize,
}

// Cell and world placement of the escape portal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct PortalSite {
    pub grid_x: i32,
    pub grid_z: i32,
    pub position: Position,
    pub asset: usize,
}

// Full placement output of one generation pass. Replaced wholesale on
// regeneration, never patched in place.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct MapLayout {
    pub floors: Vec<FloorTile>,
    pub walls: Vec<WallPiece>,
    pub decorations: Vec<DecorPiece>,
}

// ============================================================================
// Quantized Position Keys
// ============================================================================

// Position rounded to 2 decimal places on each axis, for exact-match
// deduplication under floating-point placement jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantizedPos {
    x: i64,
    y: i64,
    z: i64,
}

impl QuantizedPos {
    // Key ignoring height, for placements deduplicated in the XZ plane.
    #[must_use]
    pub fn horizontal(x: f32, z: f32) -> Self {
        Self {
            x: quantize(x),
            y: 0,
            z: quantize(z),
        }
    }
}

impl From<Position> for QuantizedPos {
    fn from(pos: Position) -> Self {
        Self {
            x: quantize(pos.x),
            y: quantize(pos.y),
            z: quantize(pos.z),
        }
    }
}

fn quantize(v: f32) -> i64 {
    (v * DEDUP_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantization_absorbs_jitter() {
        let a = QuantizedPos::from(Position::new(1.0, 0.0, -2.0));
        let b = QuantizedPos::from(Position::new(1.000_04, -0.000_03, -2.000_01));
        assert_eq!(a, b);
    }

    #[test]
    fn quantization_keeps_centimeter_differences() {
        let a = QuantizedPos::from(Position::new(1.0, 0.0, 0.0));
        let b = QuantizedPos::from(Position::new(1.01, 0.0, 0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn horizontal_key_ignores_height() {
        let key = QuantizedPos::horizontal(3.5, -1.25);
        assert_eq!(key, QuantizedPos::from(Position::new(3.5, 0.0, -1.25)));
    }
}
