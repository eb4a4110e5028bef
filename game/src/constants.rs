// ============================================================================
// Generation Defaults
// ============================================================================

pub const DEFAULT_GRID_COLS: i32 = 12;
pub const DEFAULT_GRID_ROWS: i32 = 12;

// Probability that a carved cell gets one extra opening punched through,
// turning the perfect maze into one with alternate routes.
pub const DEFAULT_LOOP_CHANCE: f64 = 0.12;

// Per-cell decoration probability; also scales the overall target count.
pub const DEFAULT_DECORATION_DENSITY: f64 = 0.25;

// Minimum pairwise distance between decorations, meters.
pub const DEFAULT_DECORATION_SPACING: f32 = 2.5;

// Nothing except floor tiles is placed inside this radius around the spawn
// anchor, meters.
pub const DEFAULT_SPAWN_CLEAR_RADIUS: f32 = 6.0;

// Decoration uniform-scale range.
pub const DECORATION_SCALE_MIN: f32 = 0.8;
pub const DECORATION_SCALE_MAX: f32 = 1.3;

// Fraction of the cell size kept clear between a decoration and the cell
// edge, so decorations never sit inside wall volumes.
pub const WALKABLE_MARGIN_RATIO: f32 = 0.18;

// ============================================================================
// Escape Portal
// ============================================================================

// Seconds after generation during which the portal may still relocate.
pub const PORTAL_MOVE_WINDOW: f32 = 30.0;

// Player distance that triggers the single relocation, meters.
pub const PORTAL_PROXIMITY_THRESHOLD: f32 = 10.0;

// ============================================================================
// Simulation Loop
// ============================================================================

pub const DEFAULT_TICK_RATE: u64 = 30;
