//! Session layer: the fixed-tick loop and everything around it.
//!
//! Ties the pure engine in `core` to an [`InputSource`](input::InputSource)
//! and a [`FrameSink`](term::FrameSink), paces ticks through a [`Pacer`],
//! and optionally journals locks to a JSON-lines file.

pub mod config;
pub mod journal;
pub mod runner;

pub use console_tetris_core as core;
pub use console_tetris_input as input;
pub use console_tetris_term as term;
pub use console_tetris_types as types;

pub use config::SessionConfig;
pub use journal::{Journal, JournalRecord};
pub use runner::{Pacer, Runner, SessionEnd, ThreadPacer};
