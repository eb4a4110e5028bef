#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;

use crate::{
    constants::{PORTAL_MOVE_WINDOW, PORTAL_PROXIMITY_THRESHOLD},
    events::RegenerateMaze,
    maze::generate_maze,
    resources::{ActiveParams, AssetOffsets, AssetPools, GridConfig, MazeRng, PortalState, WorldLayout},
    systems::portal::PortalWatcher,
};
use common::markers::{PortalMarker, SpawnAnchorMarker};
use common::components::Position;

// ============================================================================
// Regeneration System
// ============================================================================

// Handle external rebuild requests (scene resets). The grid, calibration
// cache, dedup state, layout, and portal are replaced wholesale before any
// other system can read them; on failure the old world stays untouched.
pub fn regenerate_system(
    mut commands: Commands,
    mut events: EventReader<RegenerateMaze>,
    mut grid: ResMut<GridConfig>,
    mut layout: ResMut<WorldLayout>,
    mut offsets: ResMut<AssetOffsets>,
    mut rng: ResMut<MazeRng>,
    mut portal_state: ResMut<PortalState>,
    params: Res<ActiveParams>,
    pools: Res<AssetPools>,
    anchors: Query<&Position, With<SpawnAnchorMarker>>,
) {
    // Collapse bursts of requests into one rebuild.
    let Some(request) = events.read().last() else {
        return;
    };

    let mut pass_params = params.0.clone();
    pass_params.seed = request.seed;

    let anchor = anchors.get_single().ok().copied();
    match generate_maze(&pass_params, &pools, anchor) {
        Ok(world) => {
            info!(
                "maze regenerated (seed {}): {} floors, {} walls, {} decorations",
                world.seed,
                world.layout.floors.len(),
                world.layout.walls.len(),
                world.layout.decorations.len()
            );

            grid.grid = world.grid;
            grid.frame = world.frame;
            layout.layout = world.layout;
            *offsets = world.offsets;
            rng.0 = world.rng;

            if let Some(old) = portal_state.entity {
                commands.entity(old).despawn();
            }
            let entity = world
                .portal
                .as_ref()
                .map(|site| commands.spawn((PortalMarker, site.position)).id());
            *portal_state = PortalState {
                entity,
                site: world.portal,
                watcher: PortalWatcher::new(PORTAL_MOVE_WINDOW, PORTAL_PROXIMITY_THRESHOLD),
            };
        }
        Err(err) => error!("maze regeneration failed, keeping the current world: {err:#}"),
    }
}
