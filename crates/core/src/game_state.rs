//! Game state module - the engine
//!
//! Owns the playfield, the falling piece, the piece source and every counter,
//! and advances them one fixed tick at a time:
//!
//! 1. count toward the next forced descent
//! 2. apply held controls (left, right, soft drop, edge-triggered rotate)
//! 3. on a forced descent, move down or lock, mark full rows, score, spawn
//!
//! Rows marked by a lock stay on the field (as [`Cell::Marked`]) until the
//! caller collapses them with [`GameState::collapse_cleared_rows`], which is
//! what lets a renderer show them during the clear dwell.
//!
//! [`Cell::Marked`]: crate::types::Cell::Marked

use crate::config::{ConfigError, GameConfig};
use crate::field::{ClearedRows, Playfield};
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{descent_ticks_after_lock, lock_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{ControlState, PieceKind, Rotation};

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Accepting input and gravity
    #[default]
    Running,
    /// Full rows are marked and waiting to collapse
    LineClearPause,
    /// A fresh piece did not fit at spawn; terminal
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::LineClearPause => "line_clear_pause",
            Phase::GameOver => "game_over",
        }
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Left column of the 4x4 piece box in field coordinates
    pub x: i32,
    /// Top row of the 4x4 piece box in field coordinates
    pub y: i32,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position of a field
    pub fn spawn(kind: PieceKind, field_width: usize) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: (field_width / 2) as i32,
            y: 0,
        }
    }

    /// Check if the piece can sit where it is
    pub fn fits(&self, field: &Playfield) -> bool {
        field.fits(self.kind, self.rotation, self.x, self.y)
    }

    fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    fn rotated(self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..self
        }
    }
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece as it was written into the field
    pub piece: Tetromino,
    pub rows_cleared: u32,
    /// Points awarded for this lock
    pub points: u32,
    /// Score after the award
    pub score: u32,
    pub pieces_locked: u32,
    /// Descent cadence after this lock
    pub descent_ticks: u32,
    /// The next piece did not fit at spawn
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    field: Playfield,
    active: Tetromino,
    pieces: Box<dyn PieceSource>,
    phase: Phase,
    score: u32,
    /// Ticks between forced descents
    descent_ticks: u32,
    /// Ticks since the last forced descent
    descent_counter: u32,
    pieces_locked: u32,
    ticks: u64,
    /// Rotate was held on the previous tick
    rotate_held: bool,
    pending_clear: ClearedRows,
}

impl GameState {
    /// Create a game, validating the configuration first.
    ///
    /// The first piece is drawn from `pieces` immediately. If it does not fit
    /// (only possible on degenerate fields) the game starts in
    /// [`Phase::GameOver`].
    pub fn new(config: GameConfig, pieces: impl PieceSource + 'static) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, Box::new(pieces)))
    }

    /// Default 12x18 game with seeded random pieces
    pub fn with_seed(seed: u32) -> Self {
        Self::build(GameConfig::default(), Box::new(SimpleRng::new(seed)))
    }

    fn build(config: GameConfig, mut pieces: Box<dyn PieceSource>) -> Self {
        let field = Playfield::new(&config);
        let active = Tetromino::spawn(pieces.next_piece(), field.width());
        let phase = if active.fits(&field) {
            Phase::Running
        } else {
            Phase::GameOver
        };

        Self {
            descent_ticks: config.initial_descent_ticks,
            config,
            field,
            active,
            pieces,
            phase,
            score: 0,
            descent_counter: 0,
            pieces_locked: 0,
            ticks: 0,
            rotate_held: false,
            pending_clear: ClearedRows::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn descent_ticks(&self) -> u32 {
        self.descent_ticks
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Ticks simulated while running
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Rows marked by the last lock and not yet collapsed, top to bottom
    pub fn pending_clear(&self) -> &[usize] {
        &self.pending_clear
    }

    pub fn has_pending_clear(&self) -> bool {
        !self.pending_clear.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Playfield {
        &mut self.field
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.field.width();
        out.height = self.field.height();
        self.field.write_codes(&mut out.cells);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.phase = self.phase;
        out.descent_ticks = self.descent_ticks;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one tick with the controls currently held.
    ///
    /// Does nothing outside [`Phase::Running`]. Returns the lock event when
    /// the forced descent was blocked and the piece locked.
    pub fn tick(&mut self, controls: ControlState) -> Option<LockEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        self.ticks += 1;

        self.descent_counter += 1;
        let force_down = self.descent_counter >= self.descent_ticks;
        if force_down {
            self.descent_counter = 0;
        }

        if controls.left {
            self.try_move(-1, 0);
        }
        if controls.right {
            self.try_move(1, 0);
        }
        if controls.soft_drop {
            self.try_move(0, 1);
        }

        if controls.rotate {
            if !self.rotate_held {
                self.try_rotate();
            }
            self.rotate_held = true;
        } else {
            self.rotate_held = false;
        }

        if force_down && !self.try_move(0, 1) {
            return Some(self.lock_active());
        }
        None
    }

    /// Move the active piece if the target fits. Illegal moves are no-ops.
    pub(crate) fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let moved = self.active.shifted(dx, dy);
        if moved.fits(&self.field) {
            self.active = moved;
            true
        } else {
            false
        }
    }

    /// Turn the active piece a quarter turn in place if it fits
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotated = self.active.rotated();
        if rotated.fits(&self.field) {
            self.active = rotated;
            true
        } else {
            false
        }
    }

    /// Write the active piece into the field, mark rows, score, and spawn next
    fn lock_active(&mut self) -> LockEvent {
        let piece = self.active;
        self.field
            .lock(piece.kind, piece.rotation, piece.x, piece.y);

        self.pieces_locked += 1;
        self.descent_ticks = descent_ticks_after_lock(
            self.descent_ticks,
            self.pieces_locked,
            self.config.pieces_per_speedup,
            self.config.min_descent_ticks,
        );

        let rows = self.field.mark_full_rows(piece.y);
        let points = lock_score(rows.len());
        self.score = self.score.saturating_add(points);
        let rows_cleared = rows.len() as u32;
        if !rows.is_empty() {
            self.pending_clear = rows;
            self.phase = Phase::LineClearPause;
        }

        self.active = Tetromino::spawn(self.pieces.next_piece(), self.field.width());
        let game_over = !self.active.fits(&self.field);
        if game_over {
            self.phase = Phase::GameOver;
        }

        LockEvent {
            piece,
            rows_cleared,
            points,
            score: self.score,
            pieces_locked: self.pieces_locked,
            descent_ticks: self.descent_ticks,
            game_over,
        }
    }

    /// Collapse the rows marked by the last lock and resume play.
    ///
    /// Returns how many rows were removed. A game that ended on the same lock
    /// stays over.
    pub fn collapse_cleared_rows(&mut self) -> usize {
        let removed = self.pending_clear.len();
        self.field.collapse_rows(&self.pending_clear);
        self.pending_clear.clear();
        if self.phase == Phase::LineClearPause {
            self.phase = Phase::Running;
        }
        removed
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
