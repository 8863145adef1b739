//! Fixed-tick game loop.
//!
//! Each iteration:
//!
//! 1. pause one tick
//! 2. sample input (a quit request ends the session)
//! 3. advance the engine one tick, journaling any lock
//! 4. if rows were marked: show them, pause for the dwell, collapse
//! 5. present the frame
//!
//! The loop ends when the engine reaches game over.

use std::time::Duration;

use anyhow::Result;

use crate::core::{GameSnapshot, GameState, LockEvent};
use crate::input::InputSource;
use crate::journal::{Journal, JournalRecord};
use crate::term::{FrameBuffer, FrameSink, GameView};
use crate::types::{ControlState, LINE_CLEAR_DWELL_MS, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_MS};

/// The loop's only suspension point
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Quit,
}

impl SessionEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEnd::GameOver => "game_over",
            SessionEnd::Quit => "quit",
        }
    }

    /// Closing line printed once the terminal is restored
    pub fn farewell(&self) -> &'static str {
        match self {
            SessionEnd::GameOver => "Game Over! Thanks for playing Tetris!",
            SessionEnd::Quit => "Thanks for playing Tetris!",
        }
    }
}

/// Drives a [`GameState`] from an input source to a frame sink
#[derive(Debug)]
pub struct Runner {
    view: GameView,
    frame: FrameBuffer,
    snapshot: GameSnapshot,
    tick: Duration,
    dwell: Duration,
    journal: Option<Journal>,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            view: GameView::default(),
            frame: FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            snapshot: GameSnapshot::default(),
            tick: Duration::from_millis(TICK_MS as u64),
            dwell: Duration::from_millis(LINE_CLEAR_DWELL_MS as u64),
            journal: None,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn journal_mut(&mut self) -> Option<&mut Journal> {
        self.journal.as_mut()
    }

    /// The most recently rendered frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Run until game over or a quit request.
    pub fn run(
        &mut self,
        game: &mut GameState,
        input: &mut impl InputSource,
        sink: &mut impl FrameSink,
        pacer: &mut impl Pacer,
    ) -> Result<SessionEnd> {
        self.present(game, sink)?;

        let end = loop {
            if game.is_over() {
                break SessionEnd::GameOver;
            }

            pacer.pause(self.tick);

            let poll = input.poll()?;
            if poll.quit {
                break SessionEnd::Quit;
            }

            self.step(game, poll.controls, sink, pacer)?;
        };

        if let Some(journal) = self.journal.as_mut() {
            journal.record(&JournalRecord::SessionEnd {
                reason: end.as_str(),
                score: game.score(),
                pieces_locked: game.pieces_locked(),
                ticks: game.ticks(),
            })?;
            journal.flush()?;
        }

        Ok(end)
    }

    /// One loop iteration after input: tick, journal, line-clear dwell, present.
    pub fn step(
        &mut self,
        game: &mut GameState,
        controls: ControlState,
        sink: &mut impl FrameSink,
        pacer: &mut impl Pacer,
    ) -> Result<Option<LockEvent>> {
        let event = game.tick(controls);
        if let (Some(event), Some(journal)) = (event.as_ref(), self.journal.as_mut()) {
            journal.record_lock(event)?;
        }

        if game.has_pending_clear() {
            self.present(game, sink)?;
            pacer.pause(self.dwell);
            game.collapse_cleared_rows();
        }

        self.present(game, sink)?;
        Ok(event)
    }

    fn present(&mut self, game: &GameState, sink: &mut impl FrameSink) -> Result<()> {
        game.snapshot_into(&mut self.snapshot);
        self.view.render_into(&self.snapshot, &mut self.frame);
        sink.present(&self.frame)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
