use bevy_ecs::prelude::*;

// Marker components to disambiguate entity archetypes.
#[derive(Component, Debug, Default)]
pub struct PlayerMarker;

#[derive(Component, Debug, Default)]
pub struct SpawnAnchorMarker;

#[derive(Component, Debug, Default)]
pub struct PortalMarker;
