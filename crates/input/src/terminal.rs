//! crossterm-backed input source.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{terminal, QueueableCommand};

use crate::handler::HeldKeys;
use crate::map::{control_for_key, should_quit};
use crate::{InputPoll, InputSource};

/// Reads pending key events from the terminal without blocking
#[derive(Debug, Default)]
pub struct TerminalInput {
    keys: HeldKeys,
    release_events: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the terminal agreed to report key releases
    pub fn reports_release_events(&self) -> bool {
        self.release_events
    }

    /// Ask the terminal for press/repeat/release reporting where supported.
    ///
    /// Without it, held keys fall back to the release timeout.
    pub fn enter(&mut self) -> Result<()> {
        if terminal::supports_keyboard_enhancement()? {
            let mut out = io::stdout();
            out.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            out.flush()?;
            self.release_events = true;
            self.keys.set_release_timeout(None);
        }
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.release_events {
            let mut out = io::stdout();
            out.queue(PopKeyboardEnhancementFlags)?;
            out.flush()?;
            self.release_events = false;
        }
        Ok(())
    }

    /// Feed one key event into the held state. Returns true on a quit key.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(key) {
                    return true;
                }
                if let Some(control) = control_for_key(key) {
                    if key.kind == KeyEventKind::Press {
                        self.keys.press(control, now);
                    } else {
                        self.keys.repeat(control, now);
                    }
                }
            }
            KeyEventKind::Release => {
                if let Some(control) = control_for_key(key) {
                    self.keys.release(control);
                }
            }
        }
        false
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputPoll> {
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                quit |= self.handle_key(key, Instant::now());
            }
        }
        Ok(InputPoll {
            controls: self.keys.sample(Instant::now()),
            quit,
        })
    }
}
