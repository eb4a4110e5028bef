#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{GenParams, helpers::PlacementTracker};
use crate::resources::{AssetOffsets, AssetPools, GridCell};
use common::{
    components::Position,
    layout::{FloorTile, MapLayout, QuantizedPos, WallOrientation, WallPiece},
    map::MapFrame,
};

// ============================================================================
// Floor Placement
// ============================================================================

// One floor tile per grid cell at the cell center. The dedup set is
// defensive; a freshly carved grid never offers the same cell twice.
pub(super) fn place_floors(
    layout: &mut MapLayout,
    tracker: &mut PlacementTracker,
    frame: &MapFrame,
    pools: &AssetPools,
    rng: &mut ChaCha8Rng,
) {
    if pools.floors.is_empty() {
        warn!("floor pool is empty; skipping floor placement");
        return;
    }

    for grid_z in 0..frame.rows {
        for grid_x in 0..frame.cols {
            if !tracker.floor_cells.insert((grid_x, grid_z)) {
                continue;
            }
            let asset = rng.random_range(0..pools.floors.len());
            layout.floors.push(FloorTile {
                grid_x,
                grid_z,
                position: frame.cell_center(grid_x, grid_z),
                asset,
            });
        }
    }
}

// ============================================================================
// Wall Placement
// ============================================================================

// Emit a wall piece for every boundary flag still set after carving and loop
// injection. Adjacent cells both ask for their shared boundary, so every
// position is quantized and checked against the dedup set before an asset is
// drawn; positions inside the spawn clearance are dropped outright.
pub(super) fn place_walls(
    layout: &mut MapLayout,
    tracker: &mut PlacementTracker,
    grid: &[Vec<GridCell>],
    frame: &MapFrame,
    pools: &AssetPools,
    offsets: &AssetOffsets,
    params: &GenParams,
    anchor: &Position,
    rng: &mut ChaCha8Rng,
) {
    if pools.walls.is_empty() {
        warn!("wall pool is empty; skipping wall placement");
        return;
    }

    let half = frame.cell_size / 2.0;

    for grid_z in 0..frame.rows {
        for grid_x in 0..frame.cols {
            let cell = grid[grid_z as usize][grid_x as usize];
            let center = frame.cell_center(grid_x, grid_z);

            let boundaries = [
                (cell.has_north_wall, 0.0, -half, WallOrientation::NorthSouth),
                (cell.has_south_wall, 0.0, half, WallOrientation::NorthSouth),
                (cell.has_east_wall, half, 0.0, WallOrientation::EastWest),
                (cell.has_west_wall, -half, 0.0, WallOrientation::EastWest),
            ];

            for (present, dx, dz, orientation) in boundaries {
                if !present {
                    continue;
                }
                let (wall_x, wall_z) = (center.x + dx, center.z + dz);

                if Position::new(wall_x, 0.0, wall_z).distance_xz(anchor) < params.spawn_clear_radius {
                    continue;
                }

                let key = (QuantizedPos::horizontal(wall_x, wall_z), orientation);
                if !tracker.wall_keys.insert(key) {
                    continue;
                }

                let asset = rng.random_range(0..pools.walls.len());
                let y = super::helpers::resolve_y(
                    params.ground_level,
                    offsets.walls[asset] - params.ground_level,
                    &layout.floors,
                    frame,
                    wall_x,
                    wall_z,
                );
                layout.walls.push(WallPiece {
                    position: Position::new(wall_x, y, wall_z),
                    orientation,
                    asset,
                });
            }
        }
    }
}
