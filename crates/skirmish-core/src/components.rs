//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//! Every agent carries `Faction`, `Position`, `Body`, `Health` and `Target`.

use serde::{Deserialize, Serialize};

/// Physical extent of an agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Collision radius.
    pub radius: f32,
}

/// Remaining hit points. The agent is alive while this is above zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub value: i32,
}

/// Volatile index into the opposing faction's roster.
///
/// Reassigned every tick and reinterpreted against whatever occupies that
/// roster slot, so it may be stale by the time it is read. `None` when the
/// opposing faction had no agents at assignment time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub index: Option<usize>,
}

// Faction (enums.rs) and Position (types.rs) double as components.
