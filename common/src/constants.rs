// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small tolerance for floating-point geometry comparisons (containment
// checks on points that sit exactly on an edge).
pub const GEOM_EPSILON: f32 = 1e-6;

// ============================================================================
// Grid & World Frame
// ============================================================================

// Default grid cell size in meters; overridable per generation pass.
pub const DEFAULT_CELL_SIZE: f32 = 4.0;

// Scale used when rounding positions to dedup keys: 2 decimal places.
pub const DEDUP_SCALE: f32 = 100.0;

// ============================================================================
// Map Geometry
// ============================================================================

// Elevation of the walkable top surface of floor tiles.
pub const FLOOR_ELEVATION: f32 = 0.0;

// Ground level walls and the escape portal are calibrated against.
// Independent of the floor elevation so sunken or raised floors stay possible.
pub const GROUND_LEVEL: f32 = 0.0;
