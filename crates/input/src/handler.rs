//! Held-key tracking for terminal environments.
//!
//! The engine samples "is this control held" once per tick. Terminals report
//! key presses (and auto-repeats) but many never report releases, so a
//! control without a refreshing event for longer than the release timeout is
//! treated as released. When the terminal does report releases the timeout
//! can be switched off.
//!
//! Sampling reports only what is down at that instant. A press released again
//! before the next sample is never observed.
//!
//! Rotate is edge-triggered downstream, so an auto-repeat must not restart a
//! rotate hold that already timed out: only a fresh press re-arms it.

use std::time::{Duration, Instant};

use crate::types::{Control, ControlState};

// Long enough to bridge the gap between terminal auto-repeat events.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, Copy, Default)]
struct KeySlot {
    /// Down as far as the event stream tells us
    down: bool,
    last_event: Option<Instant>,
    /// Timed out while the key may still be physically down
    repeat_suppressed: bool,
}

impl KeySlot {
    fn expired(&self, now: Instant, timeout: Option<Duration>) -> bool {
        match (timeout, self.last_event) {
            (Some(timeout), Some(last)) => now.saturating_duration_since(last) > timeout,
            _ => false,
        }
    }
}

/// Tracks which controls are held between ticks
#[derive(Debug, Clone)]
pub struct HeldKeys {
    slots: [KeySlot; 4],
    release_timeout: Option<Duration>,
}

fn slot(control: Control) -> usize {
    match control {
        Control::MoveLeft => 0,
        Control::MoveRight => 1,
        Control::SoftDrop => 2,
        Control::Rotate => 3,
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_release_timeout(Some(Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS)))
    }

    /// `None` disables auto-release; controls stay held until released.
    pub fn with_release_timeout(release_timeout: Option<Duration>) -> Self {
        Self {
            slots: [KeySlot::default(); 4],
            release_timeout,
        }
    }

    pub fn release_timeout(&self) -> Option<Duration> {
        self.release_timeout
    }

    pub fn set_release_timeout(&mut self, release_timeout: Option<Duration>) {
        self.release_timeout = release_timeout;
    }

    /// Record a fresh key press
    pub fn press(&mut self, control: Control, now: Instant) {
        let s = &mut self.slots[slot(control)];
        s.down = true;
        s.repeat_suppressed = false;
        s.last_event = Some(now);
    }

    /// Record a terminal auto-repeat.
    ///
    /// Keeps a held control alive. A rotate hold that already auto-released
    /// stays released until the next [`press`](Self::press).
    pub fn repeat(&mut self, control: Control, now: Instant) {
        let timeout = self.release_timeout;
        let s = &mut self.slots[slot(control)];
        if control == Control::Rotate {
            if s.down && s.expired(now, timeout) {
                s.down = false;
                s.repeat_suppressed = true;
            }
            if s.repeat_suppressed || !s.down {
                return;
            }
        }
        s.down = true;
        s.last_event = Some(now);
    }

    /// Record a release
    pub fn release(&mut self, control: Control) {
        let s = &mut self.slots[slot(control)];
        s.down = false;
        s.repeat_suppressed = false;
    }

    /// Sample the held state at `now`.
    pub fn sample(&mut self, now: Instant) -> ControlState {
        let mut state = ControlState::default();
        for control in Control::ALL {
            let timeout = self.release_timeout;
            let s = &mut self.slots[slot(control)];

            if s.down && s.expired(now, timeout) {
                s.down = false;
                s.repeat_suppressed = true;
            }

            state.set(control, s.down);
        }
        state
    }

    /// Forget every held control
    pub fn reset(&mut self) {
        self.slots = [KeySlot::default(); 4];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_press_holds_until_release() {
        let mut keys = HeldKeys::with_release_timeout(None);
        let t0 = Instant::now();

        keys.press(Control::MoveLeft, t0);
        assert!(keys.sample(t0 + ms(50)).left);
        assert!(keys.sample(t0 + ms(5_000)).left);

        keys.release(Control::MoveLeft);
        assert!(!keys.sample(t0 + ms(5_050)).left);
    }

    #[test]
    fn test_tap_released_before_sample_is_not_observed() {
        let mut keys = HeldKeys::with_release_timeout(None);
        let t0 = Instant::now();

        keys.press(Control::MoveLeft, t0);
        keys.release(Control::MoveLeft);

        assert!(!keys.sample(t0 + ms(50)).left);
    }

    #[test]
    fn test_rotate_repeat_after_timeout_does_not_rearm() {
        let mut keys = HeldKeys::new();
        let t0 = Instant::now();
        let mut rising_edges = 0;
        let mut was_held = false;
        let mut next_repeat = 500;

        // One physical hold: a press, then auto-repeat from 500ms every 33ms.
        keys.press(Control::Rotate, t0);
        for tick in 1..=20u64 {
            let now = tick * 50;
            while next_repeat <= now {
                keys.repeat(Control::Rotate, t0 + ms(next_repeat));
                next_repeat += 33;
            }
            let held = keys.sample(t0 + ms(now)).rotate;
            if held && !was_held {
                rising_edges += 1;
            }
            was_held = held;
        }
        assert_eq!(rising_edges, 1);

        // Releasing and pressing again is a new edge.
        keys.release(Control::Rotate);
        keys.press(Control::Rotate, t0 + ms(1_100));
        assert!(keys.sample(t0 + ms(1_110)).rotate);
    }

    #[test]
    fn test_fresh_press_rearms_after_timeout() {
        let mut keys = HeldKeys::new();
        let t0 = Instant::now();

        keys.press(Control::Rotate, t0);
        assert!(!keys.sample(t0 + ms(200)).rotate);
        keys.repeat(Control::Rotate, t0 + ms(500));
        assert!(!keys.sample(t0 + ms(510)).rotate);
        keys.press(Control::Rotate, t0 + ms(600));
        assert!(keys.sample(t0 + ms(610)).rotate);
    }

    #[test]
    fn test_repeat_keeps_movement_alive_after_timeout() {
        let mut keys = HeldKeys::new();
        let t0 = Instant::now();

        keys.press(Control::MoveRight, t0);
        assert!(!keys.sample(t0 + ms(200)).right);
        keys.repeat(Control::MoveRight, t0 + ms(500));
        assert!(keys.sample(t0 + ms(510)).right);
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut keys = HeldKeys::with_release_timeout(Some(ms(150)));
        let t0 = Instant::now();

        keys.press(Control::SoftDrop, t0);
        assert!(keys.sample(t0 + ms(50)).soft_drop);
        assert!(keys.sample(t0 + ms(150)).soft_drop);
        assert!(!keys.sample(t0 + ms(151)).soft_drop);
    }

    #[test]
    fn test_repeat_events_refresh_timeout() {
        let mut keys = HeldKeys::with_release_timeout(Some(ms(150)));
        let t0 = Instant::now();

        keys.press(Control::MoveRight, t0);
        keys.repeat(Control::MoveRight, t0 + ms(120));
        assert!(keys.sample(t0 + ms(200)).right);
        assert!(!keys.sample(t0 + ms(300)).right);
    }

    #[test]
    fn test_other_keys_do_not_refresh_timeout() {
        let mut keys = HeldKeys::with_release_timeout(Some(ms(150)));
        let t0 = Instant::now();

        keys.press(Control::MoveLeft, t0);
        assert!(keys.sample(t0 + ms(10)).left);
        keys.press(Control::Rotate, t0 + ms(140));
        let state = keys.sample(t0 + ms(200));
        assert!(!state.left);
        assert!(state.rotate);
    }

    #[test]
    fn test_controls_are_independent() {
        let mut keys = HeldKeys::with_release_timeout(None);
        let t0 = Instant::now();

        keys.press(Control::MoveLeft, t0);
        keys.press(Control::SoftDrop, t0);
        let state = keys.sample(t0);
        assert_eq!(
            state,
            ControlState::only(Control::MoveLeft).with(Control::SoftDrop)
        );
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut keys = HeldKeys::new();
        let t0 = Instant::now();
        keys.press(Control::MoveLeft, t0);
        keys.reset();
        assert_eq!(keys.sample(t0), ControlState::default());
    }

    #[test]
    fn test_default_release_timeout_is_non_zero() {
        let keys = HeldKeys::new();
        assert_eq!(keys.release_timeout(), Some(ms(150)));
    }
}
