//! Terminal "game renderer" module.
//!
//! Renders the game into a fixed 80x30 framebuffer of styled characters and
//! hands finished frames to a [`FrameSink`]. The real sink is
//! [`TerminalRenderer`] (crossterm); [`MemorySink`] keeps frames in memory
//! for headless runs and tests.

use anyhow::Result;

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use console_tetris_core as core;
pub use console_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, ScreenCell};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

/// Accepts a finished frame and shows it
pub trait FrameSink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

/// Keeps presented frames in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    frames: Vec<FrameBuffer>,
    limit: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the most recent `limit` frames
    pub fn with_limit(limit: usize) -> Self {
        Self {
            frames: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    pub fn last(&self) -> Option<&FrameBuffer> {
        self.frames.last()
    }
}

impl FrameSink for MemorySink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Ok(());
            }
            if self.frames.len() >= limit {
                self.frames.remove(0);
            }
        }
        self.frames.push(fb.clone());
        Ok(())
    }
}
