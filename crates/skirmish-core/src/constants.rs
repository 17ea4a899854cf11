//! Simulation constants and tuning parameters.

/// Host tick rate (Hz). One simulation step per tick.
pub const TICK_RATE: u32 = 60;

// --- Spatial partitioning ---

/// Edge length of a spatial grid cell. Must stay at or above the largest
/// interaction distance so a 3x3 neighborhood scan never misses a pair.
pub const CELL_SIZE: f32 = 32.0;

// --- Agents ---

/// Collision radius of every agent.
pub const AGENT_RADIUS: f32 = 2.0;

/// Health every agent starts with before its spawn bonus.
pub const BASE_HEALTH: i32 = 1000;

/// Upper bound (inclusive) of the random health bonus rolled at spawn.
pub const HEALTH_BONUS_MAX: i32 = 10;

// --- Movement ---

/// Squared distance under which a seeking agent considers itself arrived
/// and stops moving for the tick.
pub const SEEK_ARRIVAL_DIST_SQ: f32 = 1.0;

// --- Combat ---

/// Minimum damage dealt to each agent of a colliding pair.
pub const DAMAGE_MIN: i32 = 1;

/// Maximum damage dealt to each agent of a colliding pair.
pub const DAMAGE_MAX: i32 = 5;

// --- Separation ---

/// Same-faction agents closer than this push each other apart.
pub const SEPARATION_DISTANCE: f32 = 12.0;

/// Squared distance below which two agents count as coincident and are
/// ignored by separation (no direction can be derived).
pub const SEPARATION_MIN_DIST_SQ: f32 = 0.01;

// --- Spawning ---

/// Center column of the red spawn band.
pub const RED_SPAWN_X: i32 = 100;

/// Center column of the blue spawn band.
pub const BLUE_SPAWN_X: i32 = 700;

/// Horizontal jitter (either side) applied to the spawn column.
pub const SPAWN_X_JITTER: i32 = 25;

/// Top edge of both spawn bands.
pub const SPAWN_Y_MIN: i32 = 75;

/// Height of both spawn bands (inclusive span).
pub const SPAWN_Y_SPAN: i32 = 450;

/// Largest accepted faction size (six-digit entry limit).
pub const MAX_FACTION_SIZE: u32 = 999_999;

// --- Presentation ---

/// Default viewport width in world units.
pub const VIEW_WIDTH: f32 = 800.0;

/// Default viewport height in world units.
pub const VIEW_HEIGHT: f32 = 600.0;

/// Publish a render snapshot every N running ticks.
pub const RENDER_INTERVAL_TICKS: u64 = 2;

/// Delay between game over and the return to setup (seconds).
pub const RESTART_DELAY_SECS: f64 = 5.0;
