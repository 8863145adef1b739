//! Game configuration and startup validation.

use thiserror::Error;

use crate::types::{
    FIELD_DRAW_OFFSET, FIELD_HEIGHT, FIELD_WIDTH, INITIAL_DESCENT_TICKS, MIN_DESCENT_TICKS,
    MIN_FIELD_DIMENSION, PIECES_PER_SPEEDUP, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Configuration rejected at startup
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("field width {0} is below the minimum of {min}", min = MIN_FIELD_DIMENSION)]
    FieldTooNarrow(u16),
    #[error("field height {0} is below the minimum of {min}", min = MIN_FIELD_DIMENSION)]
    FieldTooShort(u16),
    #[error("a {width}x{height} field does not fit a {screen_width}x{screen_height} screen")]
    FieldExceedsScreen {
        width: u16,
        height: u16,
        screen_width: u16,
        screen_height: u16,
    },
    #[error("descent cadence must start at or above its floor ({initial} < {floor}) and the floor must be at least 1")]
    InvalidDescentCadence { initial: u32, floor: u32 },
    #[error("pieces per speed-up must be at least 1")]
    ZeroSpeedupInterval,
}

/// Playfield and pacing rules for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Field width including both wall columns
    pub field_width: u16,
    /// Field height including the floor row
    pub field_height: u16,
    /// Ticks per forced descent at game start
    pub initial_descent_ticks: u32,
    /// Ticks per forced descent never drops below this
    pub min_descent_ticks: u32,
    /// Locks between cadence decrements
    pub pieces_per_speedup: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            initial_descent_ticks: INITIAL_DESCENT_TICKS,
            min_descent_ticks: MIN_DESCENT_TICKS,
            pieces_per_speedup: PIECES_PER_SPEEDUP,
        }
    }
}

impl GameConfig {
    /// Default rules on a field of the given size
    pub fn with_field(field_width: u16, field_height: u16) -> Self {
        Self {
            field_width,
            field_height,
            ..Self::default()
        }
    }

    /// Check every precondition the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width < MIN_FIELD_DIMENSION {
            return Err(ConfigError::FieldTooNarrow(self.field_width));
        }
        if self.field_height < MIN_FIELD_DIMENSION {
            return Err(ConfigError::FieldTooShort(self.field_height));
        }
        if self.field_width.saturating_add(FIELD_DRAW_OFFSET) > SCREEN_WIDTH
            || self.field_height.saturating_add(FIELD_DRAW_OFFSET) > SCREEN_HEIGHT
        {
            return Err(ConfigError::FieldExceedsScreen {
                width: self.field_width,
                height: self.field_height,
                screen_width: SCREEN_WIDTH,
                screen_height: SCREEN_HEIGHT,
            });
        }
        if self.min_descent_ticks == 0 || self.initial_descent_ticks < self.min_descent_ticks {
            return Err(ConfigError::InvalidDescentCadence {
                initial: self.initial_descent_ticks,
                floor: self.min_descent_ticks,
            });
        }
        if self.pieces_per_speedup == 0 {
            return Err(ConfigError::ZeroSpeedupInterval);
        }
        Ok(())
    }
}
