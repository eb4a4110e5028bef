#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{components::Position, constants::GEOM_EPSILON, layout::FloorTile};

// ============================================================================
// World Frame
// ============================================================================

// Grid dimensions plus the world-space anchor all cell math hangs off.
// Columns run along +X, rows along +Z, north is -Z; the field is centered on
// the origin. Every conversion between grid and world space goes through
// this frame so the whole pipeline shares one notion of "where the maze is".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct MapFrame {
    pub cols: i32,
    pub rows: i32,
    pub cell_size: f32,
    pub origin: Position,
}

impl MapFrame {
    #[must_use]
    pub fn field_width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    #[must_use]
    pub fn field_depth(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    // Center position of a grid cell, at the frame's elevation.
    #[must_use]
    pub fn cell_center(&self, grid_x: i32, grid_z: i32) -> Position {
        Position {
            x: (grid_x as f32 + 0.5).mul_add(self.cell_size, self.origin.x - self.field_width() / 2.0),
            y: self.origin.y,
            z: (grid_z as f32 + 0.5).mul_add(self.cell_size, self.origin.z - self.field_depth() / 2.0),
        }
    }
}

// ============================================================================
// Ground Probe
// ============================================================================

// Report the top surface of the floor tile directly below (x, z), if one was
// placed there. Placement uses this to snap instances onto actual floor
// geometry instead of the nominal ground plane. Footprint containment is
// inclusive: a point exactly on a tile edge (wall positions sit on shared
// boundaries) still counts as covered.
#[must_use]
pub fn floor_top_below(floors: &[FloorTile], frame: &MapFrame, x: f32, z: f32) -> Option<f32> {
    let half = frame.cell_size / 2.0 + GEOM_EPSILON;
    floors
        .iter()
        .find(|tile| (x - tile.position.x).abs() <= half && (z - tile.position.z).abs() <= half)
        .map(|tile| tile.position.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> MapFrame {
        MapFrame {
            cols: 4,
            rows: 3,
            cell_size: 4.0,
            origin: Position::new(0.0, 0.0, 0.0),
        }
    }

    #[test]
    fn cell_centers_are_spaced_one_cell_apart() {
        let frame = frame();
        let origin_cell = frame.cell_center(0, 0);
        for grid_z in 0..frame.rows {
            for grid_x in 0..frame.cols {
                let center = frame.cell_center(grid_x, grid_z);
                assert!((center.x - origin_cell.x - grid_x as f32 * frame.cell_size).abs() < 1e-4);
                assert!((center.z - origin_cell.z - grid_z as f32 * frame.cell_size).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn field_is_centered_on_origin() {
        let frame = frame();
        let first = frame.cell_center(0, 0);
        let last = frame.cell_center(frame.cols - 1, frame.rows - 1);
        assert!((first.x + last.x).abs() < 1e-4);
        assert!((first.z + last.z).abs() < 1e-4);
    }

    #[test]
    fn probe_reports_floor_top_only_under_tiles() {
        let frame = frame();
        let tile = FloorTile {
            grid_x: 1,
            grid_z: 2,
            position: frame.cell_center(1, 2),
            asset: 0,
        };
        let floors = vec![tile.clone()];

        let hit = floor_top_below(&floors, &frame, tile.position.x + 0.5, tile.position.z - 0.5);
        assert_eq!(hit, Some(tile.position.y));

        // A point exactly on the tile edge is still covered.
        let edge = floor_top_below(&floors, &frame, tile.position.x + frame.cell_size / 2.0, tile.position.z);
        assert_eq!(edge, Some(tile.position.y));

        let miss = floor_top_below(&floors, &frame, tile.position.x + frame.cell_size, tile.position.z);
        assert_eq!(miss, None);
    }
}
