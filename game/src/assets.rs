use bevy::math::Vec3;

use crate::resources::AssetPools;
use common::assets::{AssetSpec, Bounds};

// ============================================================================
// Built-in Asset Pools
// ============================================================================

// Stand-in descriptors with hand-authored visual bounds. Pivots deliberately
// sit away from the visual base (as mesh pivots usually do), so the
// calibration cache has real work to do.
#[must_use]
pub fn default_pools() -> AssetPools {
    AssetPools {
        walls: vec![
            AssetSpec::new(
                "wall_brick",
                vec![Bounds::new(Vec3::new(-2.05, -1.5, -0.15), Vec3::new(2.05, 1.5, 0.15))],
            ),
            AssetSpec::new(
                "wall_hedge",
                vec![
                    Bounds::new(Vec3::new(-2.05, -1.1, -0.3), Vec3::new(2.05, 1.9, 0.3)),
                    Bounds::new(Vec3::new(-1.9, -1.45, -0.25), Vec3::new(1.9, -1.1, 0.25)),
                ],
            ),
        ],
        floors: vec![AssetSpec::new(
            "floor_slab",
            vec![Bounds::new(Vec3::new(-2.0, -0.25, -2.0), Vec3::new(2.0, 0.0, 2.0))],
        )],
        decorations: vec![
            AssetSpec::new(
                "rock_small",
                vec![Bounds::new(Vec3::new(-0.45, -0.2, -0.4), Vec3::new(0.45, 0.5, 0.4))],
            ),
            AssetSpec::new(
                "shrub",
                vec![
                    Bounds::new(Vec3::new(-0.1, -0.4, -0.1), Vec3::new(0.1, 0.3, 0.1)),
                    Bounds::new(Vec3::new(-0.6, 0.2, -0.6), Vec3::new(0.6, 1.2, 0.6)),
                ],
            ),
            AssetSpec::new(
                "pillar_broken",
                vec![Bounds::new(Vec3::new(-0.35, -0.9, -0.35), Vec3::new(0.35, 1.4, 0.35))],
            ),
        ],
        portals: vec![AssetSpec::new(
            "portal_ring",
            vec![
                Bounds::new(Vec3::new(-1.1, -0.15, -0.25), Vec3::new(1.1, 2.4, 0.25)),
                Bounds::new(Vec3::new(-1.4, -0.15, -0.4), Vec3::new(1.4, 0.2, 0.4)),
            ],
        )],
    }
}
