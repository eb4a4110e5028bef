use std::collections::HashSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use common::{
    components::Position,
    layout::{FloorTile, PortalSite, QuantizedPos, WallOrientation},
    map::{self, MapFrame},
};

// ============================================================================
// Placement Dedup State
// ============================================================================

// Dedup sets for one placement pass. A fresh tracker per generation is what
// guarantees "cleared and rebuilt" - there is no reset path.
#[derive(Default)]
pub(super) struct PlacementTracker {
    pub floor_cells: HashSet<(i32, i32)>,
    pub wall_keys: HashSet<(QuantizedPos, WallOrientation)>,
    pub decor_keys: HashSet<QuantizedPos>,
    pub decor_positions: Vec<Position>,
}

// ============================================================================
// Shared Placement Helpers
// ============================================================================

// Final instance height: the asset's calibration offset above its nominal
// plane, moved onto real floor geometry when the probe finds a tile below.
#[must_use]
pub(crate) fn resolve_y(
    nominal_plane: f32,
    offset_above_plane: f32,
    floors: &[FloorTile],
    frame: &MapFrame,
    x: f32,
    z: f32,
) -> f32 {
    let plane = map::floor_top_below(floors, frame, x, z).unwrap_or(nominal_plane);
    plane + offset_above_plane
}

// Uniform pick among grid cells whose center is at least `min_dist` from
// `from` in the XZ plane. `None` when no cell qualifies.
#[must_use]
pub(crate) fn pick_cell_beyond(
    frame: &MapFrame,
    rng: &mut ChaCha8Rng,
    from: &Position,
    min_dist: f32,
) -> Option<(i32, i32)> {
    let mut candidates = Vec::new();
    for grid_z in 0..frame.rows {
        for grid_x in 0..frame.cols {
            if frame.cell_center(grid_x, grid_z).distance_xz(from) >= min_dist {
                candidates.push((grid_x, grid_z));
            }
        }
    }
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}

// Build the portal site for a cell: cell center, calibrated against the
// ground level and snapped to the floor below when there is one.
#[must_use]
pub(crate) fn portal_site(
    frame: &MapFrame,
    floors: &[FloorTile],
    portal_offsets: &[f32],
    asset: usize,
    grid_x: i32,
    grid_z: i32,
    ground_level: f32,
) -> PortalSite {
    let center = frame.cell_center(grid_x, grid_z);
    let y = resolve_y(
        ground_level,
        portal_offsets[asset] - ground_level,
        floors,
        frame,
        center.x,
        center.z,
    );
    PortalSite {
        grid_x,
        grid_z,
        position: Position::new(center.x, y, center.z),
        asset,
    }
}
