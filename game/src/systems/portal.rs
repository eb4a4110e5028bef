use std::time::Duration;

#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;

use crate::{
    events::PortalRelocated,
    maze::helpers,
    resources::{ActiveParams, AssetOffsets, GridConfig, MazeRng, PortalState, WorldLayout},
};
use common::{components::Position, markers::{PlayerMarker, PortalMarker}};

// ============================================================================
// Portal Watch State Machine
// ============================================================================

// Lifecycle of the escape portal's one allowed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalPhase {
    // Window still open; the proximity rule is live.
    Armed,
    // Window elapsed without a trigger; the rule is permanently inert.
    Stable,
    // The single relocation happened.
    Relocated,
}

// Timed proximity predicate, advanced once per simulation tick. Plain data
// rather than a system so the rule is testable without an ECS world; the
// system around it owns the actual despawn/respawn.
#[derive(Debug, Clone)]
pub struct PortalWatcher {
    phase: PortalPhase,
    window: Timer,
    proximity_threshold: f32,
}

impl PortalWatcher {
    #[must_use]
    pub fn new(window_secs: f32, proximity_threshold: f32) -> Self {
        Self {
            phase: PortalPhase::Armed,
            window: Timer::from_seconds(window_secs, TimerMode::Once),
            proximity_threshold,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> PortalPhase {
        self.phase
    }

    // Advance the window and report whether a relocation should be attempted
    // this tick. Returns false forever once the watcher leaves `Armed`. The
    // caller reports a successful move through `confirm_relocated`; until
    // then the rule stays armed and may trigger again on a later tick.
    pub fn tick(&mut self, delta: Duration, player: Option<&Position>, portal: Option<&Position>) -> bool {
        if self.phase != PortalPhase::Armed {
            return false;
        }

        let _ = self.window.tick(delta);
        if self.window.finished() {
            self.phase = PortalPhase::Stable;
            return false;
        }

        match (player, portal) {
            (Some(player), Some(portal)) => player.distance_xz(portal) < self.proximity_threshold,
            _ => false,
        }
    }

    // The relocation went through; the rule never fires again.
    pub fn confirm_relocated(&mut self) {
        self.phase = PortalPhase::Relocated;
    }
}

// ============================================================================
// Portal Watch System
// ============================================================================

// Re-evaluated once per tick: if the player closes in on the portal while
// the window is open, move it once to a cell far from the player's current
// position. An empty candidate set leaves the rule armed for a later tick.
pub fn portal_watch_system(
    mut commands: Commands,
    time: Res<Time>,
    grid: Res<GridConfig>,
    layout: Res<WorldLayout>,
    offsets: Res<AssetOffsets>,
    params: Res<ActiveParams>,
    mut portal_state: ResMut<PortalState>,
    mut rng: ResMut<MazeRng>,
    mut relocated: EventWriter<PortalRelocated>,
    players: Query<&Position, With<PlayerMarker>>,
) {
    let player = players.get_single().ok().copied();
    let portal_pos = portal_state.site.as_ref().map(|site| site.position);
    if !portal_state.watcher.tick(time.delta(), player.as_ref(), portal_pos.as_ref()) {
        return;
    }
    let (Some(player), Some(site)) = (player, portal_state.site.clone()) else {
        return;
    };

    // Candidates are keyed off the player's current position, not the
    // original spawn, with double the spawn clearance.
    let min_dist = 2.0 * params.0.spawn_clear_radius;
    let Some((grid_x, grid_z)) = helpers::pick_cell_beyond(&grid.frame, &mut rng.0, &player, min_dist) else {
        debug!("portal relocation: no cell at least {min_dist}m from the player; keeping watch");
        return;
    };

    let new_site = helpers::portal_site(
        &grid.frame,
        &layout.layout.floors,
        &offsets.portals,
        site.asset,
        grid_x,
        grid_z,
        params.0.ground_level,
    );

    if let Some(old) = portal_state.entity {
        commands.entity(old).despawn();
    }
    let entity = commands.spawn((PortalMarker, new_site.position)).id();

    info!(
        "escape portal relocated from cell ({}, {}) to cell ({}, {})",
        site.grid_x, site.grid_z, new_site.grid_x, new_site.grid_z
    );
    relocated.send(PortalRelocated {
        from: site.position,
        to: new_site.position,
    });

    portal_state.entity = Some(entity);
    portal_state.site = Some(new_site);
    portal_state.watcher.confirm_relocated();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn second() -> Duration {
        Duration::from_secs(1)
    }

    fn far() -> Position {
        Position::new(50.0, 0.0, 0.0)
    }

    fn near() -> Position {
        Position::new(5.0, 0.0, 0.0)
    }

    fn portal() -> Position {
        Position::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn triggers_once_on_approach_within_window() {
        let mut watcher = PortalWatcher::new(30.0, 10.0);

        // Player walks in from 50m, reaching 5m at t = 10s.
        for _ in 0..10 {
            assert!(!watcher.tick(second(), Some(&far()), Some(&portal())));
        }
        assert!(watcher.tick(second(), Some(&near()), Some(&portal())));
        watcher.confirm_relocated();
        assert_eq!(watcher.phase(), PortalPhase::Relocated);

        // A second approach at t = 20s has no effect.
        for _ in 0..10 {
            assert!(!watcher.tick(second(), Some(&near()), Some(&portal())));
        }
    }

    #[test]
    fn goes_inert_when_the_window_elapses() {
        let mut watcher = PortalWatcher::new(30.0, 10.0);
        for _ in 0..31 {
            assert!(!watcher.tick(second(), Some(&far()), Some(&portal())));
        }
        assert_eq!(watcher.phase(), PortalPhase::Stable);
        assert!(!watcher.tick(second(), Some(&near()), Some(&portal())));
    }

    #[test]
    fn stays_armed_until_a_move_is_confirmed() {
        // A failed relocation attempt (no candidate cell) must not burn the
        // one allowed move.
        let mut watcher = PortalWatcher::new(30.0, 10.0);
        assert!(watcher.tick(second(), Some(&near()), Some(&portal())));
        assert_eq!(watcher.phase(), PortalPhase::Armed);
        assert!(watcher.tick(second(), Some(&near()), Some(&portal())));
    }

    #[test]
    fn skips_gracefully_without_a_player() {
        let mut watcher = PortalWatcher::new(30.0, 10.0);
        assert!(!watcher.tick(second(), None, Some(&portal())));
        assert_eq!(watcher.phase(), PortalPhase::Armed);
    }
}
