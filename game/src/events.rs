use bevy::prelude::*;

use common::components::Position;

// ============================================================================
// World Events
// ============================================================================

// External request to rebuild the maze from scratch (scene resets route
// through this). Carries an optional fixed seed; without one, a fresh
// entropy draw seeds the new pass.
#[derive(Event, Debug, Default)]
pub struct RegenerateMaze {
    pub seed: Option<u64>,
}

// Fired when the escape portal performs its one allowed relocation, so
// overlay/UI listeners don't have to poll for the move.
#[derive(Event, Debug)]
pub struct PortalRelocated {
    pub from: Position,
    pub to: Position,
}
