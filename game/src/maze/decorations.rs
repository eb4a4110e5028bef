#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{GenParams, helpers::PlacementTracker};
use crate::{
    constants::{DECORATION_SCALE_MAX, DECORATION_SCALE_MIN, WALKABLE_MARGIN_RATIO},
    resources::{AssetOffsets, AssetPools},
};
use common::{
    components::Position,
    layout::{DecorPiece, MapLayout, QuantizedPos},
    map::MapFrame,
};

// ============================================================================
// Decoration Placement
// ============================================================================

// Scatter decorations over the grid in row-major order. Each cell gets one
// Bernoulli trial at the configured density, so the rounded target count is
// an upper bound rather than a promise; a candidate that lands outside the
// cell's interior walkable zone, inside the spawn clearance, or too close to
// an earlier decoration is dropped.
pub(super) fn place_decorations(
    layout: &mut MapLayout,
    tracker: &mut PlacementTracker,
    frame: &MapFrame,
    pools: &AssetPools,
    offsets: &AssetOffsets,
    params: &GenParams,
    anchor: &Position,
    rng: &mut ChaCha8Rng,
) {
    if pools.decorations.is_empty() {
        warn!("decoration pool is empty; skipping decoration placement");
        return;
    }

    let target = ((frame.cols * frame.rows) as f64 * params.decoration_density).round() as usize;
    if target == 0 {
        return;
    }

    let half = frame.cell_size / 2.0;
    let max_offset = frame.cell_size * (0.5 - WALKABLE_MARGIN_RATIO);

    'cells: for grid_z in 0..frame.rows {
        for grid_x in 0..frame.cols {
            if layout.decorations.len() >= target {
                break 'cells;
            }
            if !rng.random_bool(params.decoration_density) {
                continue;
            }

            let center = frame.cell_center(grid_x, grid_z);
            let dx = rng.random_range(-half..=half);
            let dz = rng.random_range(-half..=half);
            if dx.abs() > max_offset || dz.abs() > max_offset {
                continue;
            }

            let candidate = Position::new(center.x + dx, center.y, center.z + dz);
            if candidate.distance_xz(anchor) < params.spawn_clear_radius {
                continue;
            }
            if tracker
                .decor_positions
                .iter()
                .any(|placed| placed.distance_xz(&candidate) < params.decoration_spacing)
            {
                continue;
            }
            if !tracker.decor_keys.insert(QuantizedPos::horizontal(candidate.x, candidate.z)) {
                continue;
            }

            let asset = rng.random_range(0..pools.decorations.len());
            let yaw = rng.random_range(0.0..std::f32::consts::TAU);
            let scale = rng.random_range(DECORATION_SCALE_MIN..=DECORATION_SCALE_MAX);
            let y = super::helpers::resolve_y(
                params.floor_elevation,
                offsets.decorations[asset],
                &layout.floors,
                frame,
                candidate.x,
                candidate.z,
            );

            tracker.decor_positions.push(candidate);
            layout.decorations.push(DecorPiece {
                position: Position::new(candidate.x, y, candidate.z),
                yaw,
                scale,
                asset,
            });
        }
    }
}
