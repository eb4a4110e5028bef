#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;

use crate::resources::{AssetOffsets, AssetPools};
use common::assets::AssetSpec;

// ============================================================================
// Ground-Calibration Cache
// ============================================================================

// Precompute the vertical offset that puts each asset's visual base on its
// target level. Walls and the portal calibrate against the configured ground
// level; decorations calibrate to sit exactly on the floor plane they land
// on. Rebuilt from scratch per generation pass - offsets for assets that
// left the pools never linger.
#[must_use]
pub fn build_offsets(pools: &AssetPools, ground_level: f32) -> AssetOffsets {
    AssetOffsets {
        walls: pool_offsets(&pools.walls, ground_level, "wall"),
        decorations: pool_offsets(&pools.decorations, 0.0, "decoration"),
        portals: pool_offsets(&pools.portals, ground_level, "portal"),
    }
}

fn pool_offsets(pool: &[AssetSpec], target_level: f32, phase: &str) -> Vec<f32> {
    pool.iter()
        .map(|asset| {
            asset.combined_bounds().map_or_else(
                || {
                    warn!(
                        "asset '{}' in the {} pool has no visual geometry; using a zero offset",
                        asset.name, phase
                    );
                    0.0
                },
                |bounds| target_level - bounds.min.y,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use common::assets::Bounds;

    fn pools() -> AssetPools {
        AssetPools {
            walls: vec![AssetSpec::new(
                "wall",
                vec![
                    Bounds::new(Vec3::new(-2.0, -0.5, -0.2), Vec3::new(2.0, 2.5, 0.2)),
                    Bounds::new(Vec3::new(-0.5, -1.25, -0.5), Vec3::new(0.5, 0.0, 0.5)),
                ],
            )],
            floors: Vec::new(),
            decorations: vec![AssetSpec::new(
                "rock",
                vec![Bounds::new(Vec3::new(-0.4, -0.3, -0.4), Vec3::new(0.4, 0.6, 0.4))],
            )],
            portals: vec![AssetSpec::new("hollow", Vec::new())],
        }
    }

    #[test]
    fn wall_offset_uses_the_union_of_sub_parts() {
        let offsets = build_offsets(&pools(), 1.0);
        // Lowest sub-part bottom is -1.25, so the base reaches ground at 2.25.
        assert!((offsets.walls[0] - 2.25).abs() < 1e-6);
    }

    #[test]
    fn decoration_offset_targets_the_floor_plane() {
        let offsets = build_offsets(&pools(), 1.0);
        assert!((offsets.decorations[0] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn boundless_asset_falls_back_to_zero() {
        let offsets = build_offsets(&pools(), 1.0);
        assert!((offsets.portals[0]).abs() < f32::EPSILON);
    }
}
