//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, input mapping).
//!
//! # Playfield Dimensions
//!
//! Classic console playfield, borders included:
//!
//! - **Width**: 12 columns (indexed 0-11, columns 0 and 11 are walls)
//! - **Height**: 18 rows (indexed 0-17, row 17 is the floor)
//! - **Spawn position**: (width / 2, 0), rotation 0
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed tick interval (20 ticks per second) |
//! | `LINE_CLEAR_DWELL_MS` | 400 | Marked rows stay visible this long |
//! | `INITIAL_DESCENT_TICKS` | 20 | Ticks per forced descent at game start |
//! | `MIN_DESCENT_TICKS` | 10 | Fastest forced descent cadence |
//! | `PIECES_PER_SPEEDUP` | 10 | Locks between cadence decrements |
//!
//! # Examples
//!
//! ```
//! use console_tetris_types::{Cell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! // The square is id 3
//! let piece = PieceKind::from_id(3).unwrap();
//! assert_eq!(piece, PieceKind::O);
//!
//! // Rotation wraps modulo 4
//! assert_eq!(Rotation::from_turns(5), Rotation::East);
//!
//! // Locked cells carry id + 1
//! assert_eq!(Cell::Locked(PieceKind::O).code(), 4);
//!
//! assert_eq!(FIELD_WIDTH, 12);
//! assert_eq!(FIELD_HEIGHT, 18);
//! ```

/// Playfield width in cells, border columns included
pub const FIELD_WIDTH: u16 = 12;

/// Playfield height in cells, floor row included
pub const FIELD_HEIGHT: u16 = 18;

/// Smallest playfield dimension that can host a 4x4 piece box
pub const MIN_FIELD_DIMENSION: u16 = 4;

/// Character screen width
pub const SCREEN_WIDTH: u16 = 80;

/// Character screen height
pub const SCREEN_HEIGHT: u16 = 30;

/// Offset of the playfield inside the screen on both axes
pub const FIELD_DRAW_OFFSET: u16 = 2;

/// Fixed tick interval in milliseconds (50ms = 20 ticks per second)
pub const TICK_MS: u32 = 50;

/// How long marked rows stay on screen before collapsing
pub const LINE_CLEAR_DWELL_MS: u32 = 400;

/// Ticks between forced descents at game start
pub const INITIAL_DESCENT_TICKS: u32 = 20;

/// Floor for the forced descent cadence
pub const MIN_DESCENT_TICKS: u32 = 10;

/// The cadence speeds up by one tick every this many locked pieces
pub const PIECES_PER_SPEEDUP: u32 = 10;

/// Score awarded for every locked piece
pub const LOCK_SCORE: u32 = 25;

/// Line bonus base, multiplied by 2^rows
pub const LINE_BONUS_BASE: u32 = 100;


/// The seven tetromino piece kinds, in catalog order
///
/// The discriminant is the catalog id (0..=6). Names follow the shape each
/// canonical grid draws:
/// - **I** (0): vertical bar
/// - **Z** (1), **S** (2): skew pieces, standing upright
/// - **O** (3): 2x2 square
/// - **T** (4): tee, pointing left
/// - **L** (5), **J** (6): hooks, upside down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    Z,
    S,
    O,
    T,
    L,
    J,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Catalog id in 0..=6
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by catalog id
    ///
    /// # Examples
    ///
    /// ```
    /// use console_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(6), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_id(7), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Screen letter for this kind: 'A' + id
    pub fn letter(self) -> char {
        (b'A' + self.id()) as char
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Rotation state, one of four quarter turns
///
/// - **North**: canonical orientation (0°)
/// - **East**: 90°
/// - **South**: 180°
/// - **West**: 270°
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Build a rotation from any number of quarter turns (taken mod 4)
    pub fn from_turns(turns: u32) -> Self {
        match turns % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Quarter turns from North, in 0..=3
    pub fn turns(self) -> u32 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate one quarter turn
    ///
    /// # Examples
    ///
    /// ```
    /// use console_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::from_turns(self.turns() + 1)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// A cell on the playfield
///
/// Each variant has a fixed numeric occupancy code:
/// - `Empty`: 0
/// - `Locked(kind)`: kind id + 1 (1..=7)
/// - `Marked`: 8, a full row waiting to collapse
/// - `Border`: 9, walls and floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Locked(PieceKind),
    Marked,
    Border,
}

impl Cell {
    /// Numeric occupancy code
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Locked(kind) => kind.id() + 1,
            Cell::Marked => 8,
            Cell::Border => 9,
        }
    }

    /// Decode an occupancy code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1..=7 => PieceKind::from_id(code - 1).map(Cell::Locked),
            8 => Some(Cell::Marked),
            9 => Some(Cell::Border),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Screen character for this cell
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Locked(kind) => kind.letter(),
            Cell::Marked => '=',
            Cell::Border => '#',
        }
    }
}

/// The four logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece one quarter turn (once per press)
    Rotate,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::MoveLeft,
        Control::MoveRight,
        Control::SoftDrop,
        Control::Rotate,
    ];

    /// Convert to camelCase string (journal field values)
    pub fn as_str(&self) -> &'static str {
        match self {
            Control::MoveLeft => "moveLeft",
            Control::MoveRight => "moveRight",
            Control::SoftDrop => "softDrop",
            Control::Rotate => "rotate",
        }
    }
}

/// "Is currently held" state of every control, sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub soft_drop: bool,
    pub rotate: bool,
}

impl ControlState {
    /// State with exactly one control held
    pub fn only(control: Control) -> Self {
        let mut state = Self::default();
        state.set(control, true);
        state
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::MoveLeft => self.left,
            Control::MoveRight => self.right,
            Control::SoftDrop => self.soft_drop,
            Control::Rotate => self.rotate,
        }
    }

    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::MoveLeft => self.left = held,
            Control::MoveRight => self.right = held,
            Control::SoftDrop => self.soft_drop = held,
            Control::Rotate => self.rotate = held,
        }
    }

    /// Builder-style variant of [`ControlState::set`]
    pub fn with(mut self, control: Control) -> Self {
        self.set(control, true);
        self
    }
}
