//! Session configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_SEED` | system clock | piece sequence seed |
//! | `TETRIS_LOG_PATH` | unset | JSON-lines journal path |
//! | `TETRIS_TICK_MS` | 50 | tick length in milliseconds |

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::types::{LINE_CLEAR_DWELL_MS, TICK_MS};

/// Everything a session needs besides the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub game: GameConfig,
    pub seed: u32,
    pub journal_path: Option<PathBuf>,
    pub tick: Duration,
    pub line_clear_dwell: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: 1,
            journal_path: None,
            tick: Duration::from_millis(TICK_MS as u64),
            line_clear_dwell: Duration::from_millis(LINE_CLEAR_DWELL_MS as u64),
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an arbitrary variable source.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let journal_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let tick = lookup("TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);

        Self {
            seed,
            journal_path,
            tick,
            ..defaults
        }
    }
}

/// Fold both halves of the seconds count into the nanoseconds
fn fold_seed(secs: u64, nanos: u32) -> u32 {
    nanos ^ (secs as u32) ^ ((secs >> 32) as u32)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| fold_seed(d.as_secs(), d.subsec_nanos()))
        .unwrap_or(1)
}
