use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::{maze::GenParams, systems::portal::PortalWatcher};
use common::{
    assets::AssetSpec,
    layout::{MapLayout, PortalSite},
    map::MapFrame,
};

// ============================================================================
// Grid Cells
// ============================================================================

// One grid unit. Boundary flags are true when a wall is present; the default
// cell is fully walled and unvisited, the state carving starts from. Flags
// between adjacent cells are kept mutually consistent by always mutating them
// in pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub visited: bool,
    pub has_north_wall: bool,
    pub has_south_wall: bool,
    pub has_east_wall: bool,
    pub has_west_wall: bool,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            visited: false,
            has_north_wall: true,
            has_south_wall: true,
            has_east_wall: true,
            has_west_wall: true,
        }
    }
}

// ============================================================================
// Bevy Resources
// ============================================================================

// Grid topology plus the world frame it maps onto. Rebuilt wholesale by each
// generation pass; nothing mutates cells in place afterwards.
#[derive(Resource)]
pub struct GridConfig {
    pub grid: Vec<Vec<GridCell>>,
    pub frame: MapFrame,
}

// Placement output of the current generation.
#[derive(Resource, Default)]
pub struct WorldLayout {
    pub layout: MapLayout,
}

// Ordered pools of interchangeable assets, one pool per placement phase.
#[derive(Resource, Clone, Default)]
pub struct AssetPools {
    pub walls: Vec<AssetSpec>,
    pub floors: Vec<AssetSpec>,
    pub decorations: Vec<AssetSpec>,
    pub portals: Vec<AssetSpec>,
}

// Vertical calibration offsets, indexed like the pool vectors. Rebuilt from
// the pools before any placement reads them, every generation.
#[derive(Resource, Debug, Clone, Default)]
pub struct AssetOffsets {
    pub walls: Vec<f32>,
    pub decorations: Vec<f32>,
    pub portals: Vec<f32>,
}

// Seeded random stream for the current generation pass. Every carving,
// placement, and relocation draw comes from here; reaching for a global RNG
// anywhere in that path breaks seed reproducibility.
#[derive(Resource)]
pub struct MazeRng(pub ChaCha8Rng);

// Parameters the current world was generated with; regeneration reuses them.
#[derive(Resource, Clone)]
pub struct ActiveParams(pub GenParams);

// Escape portal instance plus its one-shot relocation rule. Rebuilt at each
// generation. `entity` and `site` stay `None` when the portal pool is empty.
#[derive(Resource)]
pub struct PortalState {
    pub entity: Option<Entity>,
    pub site: Option<PortalSite>,
    pub watcher: PortalWatcher,
}
