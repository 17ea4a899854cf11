//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::CELL_SIZE;

/// 2D position in world units. x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn distance_squared(&self, other: &Position) -> f32 {
        self.to_vec2().distance_squared(other.to_vec2())
    }

    /// Grid cell containing this position.
    pub fn cell(&self) -> CellCoord {
        CellCoord::of(self)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Integer coordinate of a spatial grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell containing `pos`. Uses floor so negative coordinates land in
    /// negative cells instead of collapsing onto cell 0.
    pub fn of(pos: &Position) -> Self {
        Self {
            x: (pos.x / CELL_SIZE).floor() as i32,
            y: (pos.y / CELL_SIZE).floor() as i32,
        }
    }

    /// The 3x3 block centered on this cell, self included.
    pub fn neighborhood(self) -> impl Iterator<Item = CellCoord> {
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| CellCoord::new(self.x + dx, self.y + dy)))
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of unpaused ticks since the game started.
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Axis-aligned rectangle of world space visible to the host's camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// View centered on `center` at the given zoom level.
    pub fn centered(center: Position, width: f32, height: f32, zoom: f32) -> Self {
        let w = width / zoom;
        let h = height / zoom;
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }
}

impl Default for ViewRect {
    fn default() -> Self {
        Self::new(
            0.0,
            0.0,
            crate::constants::VIEW_WIDTH,
            crate::constants::VIEW_HEIGHT,
        )
    }
}
