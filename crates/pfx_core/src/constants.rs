// Tuning constants shared by the simulation, renderer and exporter.
// Units: distance in canvas pixels, time in seconds, angles in radians
// unless a name says otherwise.

/// Edge length of the square render target (live preview and every flipbook cell)
pub const CANVAS_SIZE: u32 = 512;

/// Scales the configured gravity slider range into a visible acceleration
pub const GRAVITY_SCALE: f64 = 100.0;

/// Launch speed is drawn from `speed * [MIN_SPEED_FACTOR, 1.0)`
pub const MIN_SPEED_FACTOR: f64 = 0.5;

/// Angular velocity is drawn from `[-0.5, 0.5) * ANGULAR_VELOCITY_SPREAD`
pub const ANGULAR_VELOCITY_SPREAD: f64 = 5.0;

/// Portion of life over which fade-in ramps alpha from 0 to 1
pub const FADE_IN_FRACTION: f64 = 0.2;

/// Fraction of base size lost by the end of life when scaling is enabled
pub const SHRINK_OVER_LIFE: f64 = 0.5;

/// Per-particle, per-tick probability of leaving a trail decal
pub const TRAIL_SPAWN_CHANCE: f64 = 0.3;

/// Decal alpha relative to its parent particle
pub const TRAIL_ALPHA_SCALE: f64 = 0.3;

/// Decal size relative to its parent particle's current size
pub const TRAIL_SIZE_SCALE: f64 = 0.5;

/// Fixed decal life, independent of the parent particle
pub const TRAIL_LIFE: f64 = 0.1;

/// Multiplicative decal alpha decay applied once per tick
pub const TRAIL_ALPHA_DECAY: f64 = 0.95;

/// Number of outer points on the star silhouette
pub const STAR_SPIKES: usize = 5;

/// Inner star vertex radius relative to the outer radius
pub const STAR_INNER_RATIO: f64 = 0.5;

/// Upper bound on a live-preview tick, so a stalled window does not explode the sim
pub const MAX_FRAME_DT: f64 = 0.1;

/// Radius of the emitter origin marker drawn by the gizmo
pub const GIZMO_MARKER_RADIUS: f64 = 8.0;

/// Columns in an exported flipbook sheet
pub const FLIPBOOK_COLUMNS: u32 = 8;

/// Export frame rate when none is given
pub const DEFAULT_EXPORT_FPS: u32 = 30;

/// Export duration in seconds when none is given
pub const DEFAULT_EXPORT_DURATION: f64 = 2.0;

/// Seed for deterministic simulation when none is given
pub const DEFAULT_SEED: u64 = 42;
