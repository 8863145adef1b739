//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four [`Control`]s and tracks which of
//! them are held, so the runner can sample a [`ControlState`] once per tick.
//! Works in terminals with or without key-release events.
//!
//! [`Control`]: crate::types::Control

use std::collections::VecDeque;

use anyhow::Result;

pub mod handler;
pub mod map;
pub mod terminal;

pub use console_tetris_types as types;

pub use handler::HeldKeys;
pub use map::{control_for_key, should_quit};
pub use terminal::TerminalInput;

use types::ControlState;

/// One tick's worth of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputPoll {
    pub controls: ControlState,
    /// The player asked to leave
    pub quit: bool,
}

/// Anything the runner can sample controls from once per tick
pub trait InputSource {
    /// Drain pending events without blocking and report the held state.
    fn poll(&mut self) -> Result<InputPoll>;
}

/// Replays a fixed list of polls, then repeats a final one forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    polls: VecDeque<InputPoll>,
    then: InputPoll,
}

impl ScriptedInput {
    pub fn new(polls: impl IntoIterator<Item = InputPoll>) -> Self {
        Self {
            polls: polls.into_iter().collect(),
            then: InputPoll::default(),
        }
    }

    /// Poll returned once the script runs out
    pub fn then(mut self, poll: InputPoll) -> Self {
        self.then = poll;
        self
    }

    /// Hold the same controls on every tick
    pub fn holding(controls: ControlState) -> Self {
        Self::default().then(InputPoll {
            controls,
            quit: false,
        })
    }

    pub fn remaining(&self) -> usize {
        self.polls.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<InputPoll> {
        Ok(self.polls.pop_front().unwrap_or(self.then))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Control;

    #[test]
    fn test_scripted_input_replays_then_repeats() {
        let left = InputPoll {
            controls: ControlState::only(Control::MoveLeft),
            quit: false,
        };
        let mut input = ScriptedInput::new([left, InputPoll::default()])
            .then(InputPoll {
                controls: ControlState::default(),
                quit: true,
            });

        assert_eq!(input.poll().unwrap(), left);
        assert_eq!(input.poll().unwrap(), InputPoll::default());
        assert!(input.poll().unwrap().quit);
        assert!(input.poll().unwrap().quit);
        assert_eq!(input.remaining(), 0);
    }
}
