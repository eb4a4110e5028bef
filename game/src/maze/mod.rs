mod decorations;
mod grid;
pub(crate) mod helpers;
mod walls;

pub use grid::{Direction, all_cells_reachable, carve_maze, cleared_boundary_pairs, inject_loops, open_boundary};

use anyhow::{Result, bail};
#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::{
    calibrate,
    constants::{
        DEFAULT_DECORATION_DENSITY, DEFAULT_DECORATION_SPACING, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS,
        DEFAULT_LOOP_CHANCE, DEFAULT_SPAWN_CLEAR_RADIUS,
    },
    resources::{AssetOffsets, AssetPools, GridCell},
};
use common::{
    components::Position,
    constants::{DEFAULT_CELL_SIZE, FLOOR_ELEVATION, GROUND_LEVEL},
    layout::{MapLayout, PortalSite},
    map::MapFrame,
};

// ============================================================================
// Generation Parameters
// ============================================================================

// Knobs for one generation pass. `Default` mirrors the CLI defaults, and a
// JSON config file deserializes into the same struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenParams {
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
    // Fixed seed; `None` takes a fresh entropy draw per pass.
    pub seed: Option<u64>,
    pub loop_chance: f64,
    pub decoration_density: f64,
    pub decoration_spacing: f32,
    pub spawn_clear_radius: f32,
    pub ground_level: f32,
    pub floor_elevation: f32,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_COLS,
            height: DEFAULT_GRID_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            seed: None,
            loop_chance: DEFAULT_LOOP_CHANCE,
            decoration_density: DEFAULT_DECORATION_DENSITY,
            decoration_spacing: DEFAULT_DECORATION_SPACING,
            spawn_clear_radius: DEFAULT_SPAWN_CLEAR_RADIUS,
            ground_level: GROUND_LEVEL,
            floor_elevation: FLOOR_ELEVATION,
        }
    }
}

impl GenParams {
    fn validate(&self) -> Result<()> {
        if self.width < 1 || self.height < 1 {
            bail!("grid dimensions must be at least 1x1, got {}x{}", self.width, self.height);
        }
        if self.cell_size <= 0.0 {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if !(0.0..=1.0).contains(&self.loop_chance) {
            bail!("loop chance must be within [0, 1], got {}", self.loop_chance);
        }
        if !(0.0..=1.0).contains(&self.decoration_density) {
            bail!("decoration density must be within [0, 1], got {}", self.decoration_density);
        }
        if self.decoration_spacing < 0.0 || self.spawn_clear_radius < 0.0 {
            bail!("distances must not be negative");
        }
        Ok(())
    }
}

// ============================================================================
// Generation Entry Point
// ============================================================================

// Everything one generation pass produces. Regeneration means dropping this
// and building a new one; nothing is patched in place.
#[derive(Debug)]
pub struct GeneratedWorld {
    pub seed: u64,
    pub grid: Vec<Vec<GridCell>>,
    pub frame: MapFrame,
    pub layout: MapLayout,
    pub offsets: AssetOffsets,
    pub portal: Option<PortalSite>,
    // Live continuation of the seeded stream, for draws the running
    // simulation still needs (the portal relocation pick).
    pub rng: ChaCha8Rng,
}

// Generate a full maze world: carve the grid, rebuild the calibration cache,
// place floors, walls, and decorations, and choose the escape portal cell.
// The spawn anchor is mandatory; without it this returns an error before any
// world state is built.
pub fn generate_maze(params: &GenParams, pools: &AssetPools, anchor: Option<Position>) -> Result<GeneratedWorld> {
    params.validate()?;
    let Some(anchor) = anchor else {
        bail!("no spawn anchor found; aborting generation before placing anything");
    };

    let seed = params.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // The calibration cache is rebuilt before placement because placement
    // reads it synchronously.
    let offsets = calibrate::build_offsets(pools, params.ground_level);

    let (cols, rows) = (params.width, params.height);
    let mut grid = vec![vec![GridCell::default(); cols as usize]; rows as usize];
    carve_maze(&mut grid, cols, rows, &mut rng);
    inject_loops(&mut grid, cols, rows, params.loop_chance, &mut rng);
    debug_assert!(all_cells_reachable(&grid, cols, rows));

    let frame = MapFrame {
        cols,
        rows,
        cell_size: params.cell_size,
        origin: Position::new(anchor.x, params.floor_elevation, anchor.z),
    };

    let mut layout = MapLayout::default();
    let mut tracker = helpers::PlacementTracker::default();
    walls::place_floors(&mut layout, &mut tracker, &frame, pools, &mut rng);
    walls::place_walls(&mut layout, &mut tracker, &grid, &frame, pools, &offsets, params, &anchor, &mut rng);
    decorations::place_decorations(&mut layout, &mut tracker, &frame, pools, &offsets, params, &anchor, &mut rng);

    let portal = place_portal(&frame, &layout, pools, &offsets, params, &anchor, &mut rng)?;

    Ok(GeneratedWorld {
        seed,
        grid,
        frame,
        layout,
        offsets,
        portal,
        rng,
    })
}

// Initial escape portal placement: a uniform pick among cells far enough
// from the spawn anchor. An empty portal pool downgrades the phase to a
// warning; an empty candidate set is fatal.
fn place_portal(
    frame: &MapFrame,
    layout: &MapLayout,
    pools: &AssetPools,
    offsets: &AssetOffsets,
    params: &GenParams,
    anchor: &Position,
    rng: &mut ChaCha8Rng,
) -> Result<Option<PortalSite>> {
    if pools.portals.is_empty() {
        warn!("portal pool is empty; skipping escape portal placement");
        return Ok(None);
    }

    let Some((grid_x, grid_z)) = helpers::pick_cell_beyond(frame, rng, anchor, params.spawn_clear_radius) else {
        bail!(
            "no grid cell is at least {}m from the spawn anchor; cannot place the escape portal",
            params.spawn_clear_radius
        );
    };
    let asset = rng.random_range(0..pools.portals.len());

    Ok(Some(helpers::portal_site(
        frame,
        &layout.floors,
        &offsets.portals,
        asset,
        grid_x,
        grid_z,
        params.ground_level,
    )))
}
