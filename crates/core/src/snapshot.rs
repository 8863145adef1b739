//! Snapshot module - a read-only copy of what a frame needs
//!
//! Renderers never borrow the engine; they read a [`GameSnapshot`] that the
//! engine fills in place, so one buffer can be reused for every frame.

use crate::game_state::{Phase, Tetromino};
use crate::types::{PieceKind, Rotation};

/// Falling piece as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(piece: Tetromino) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Field occupancy codes plus everything drawn around them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major occupancy codes: 0 empty, 1..=7 locked piece id + 1, 8 marked, 9 border
    pub cells: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub phase: Phase,
    pub descent_ticks: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    /// Occupancy code at (x, y), or 0 outside the field
    pub fn code_at(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.cells.get(y * self.width + x).copied().unwrap_or(0)
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
