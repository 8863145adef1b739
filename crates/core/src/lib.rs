//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals, clocks, or I/O: time only advances
//! when the caller invokes [`GameState::tick`], and the next piece comes from a
//! [`PieceSource`] the caller supplies.
//!
//! # Module Structure
//!
//! - [`config`]: field size and pacing rules, validated up front
//! - [`field`]: walled playfield with collision, locking, and row marking
//! - [`game_state`]: active piece, controls, descent cadence, scoring, phases
//! - [`pieces`]: the seven 4x4 shapes and quarter-turn index mapping
//! - [`rng`]: seeded random and scripted piece sources
//! - [`scoring`]: lock awards and speed-up schedule
//! - [`snapshot`]: renderer-facing copy of the state
//!
//! # Game Rules
//!
//! - One tick is 50 ms; a piece is forced down every 20 ticks at first
//! - Every 10 locks the forced descent comes one tick sooner, down to 10
//! - Held left/right/down keys move the piece once per tick
//! - Rotation turns clockwise once per press, in place, with no wall kicks
//! - A lock scores 25, plus `100 * 2^rows` when it fills rows
//! - The game ends when a fresh piece does not fit at spawn
//!
//! # Example
//!
//! ```
//! use console_tetris_core::{GameConfig, GameState, ScriptedPieces};
//! use console_tetris_core::types::{Control, ControlState, PieceKind};
//!
//! let mut game = GameState::new(GameConfig::default(), ScriptedPieces::repeat(PieceKind::O)).unwrap();
//!
//! // Hold soft drop until the square lands on the floor
//! let event = loop {
//!     if let Some(event) = game.tick(ControlState::only(Control::SoftDrop)) {
//!         break event;
//!     }
//! };
//!
//! assert_eq!(event.points, 25);
//! assert_eq!(game.score(), 25);
//! ```

pub mod config;
pub mod field;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use console_tetris_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use field::{ClearedRows, Playfield};
pub use game_state::{GameState, LockEvent, Phase, Tetromino};
pub use pieces::{rotate, PIECE_SIZE};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng};
pub use scoring::{descent_ticks_after_lock, lock_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
