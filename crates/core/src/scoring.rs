//! Scoring module - lock awards and speed-up rules
//!
//! Every lock is worth a flat [`LOCK_SCORE`]. Clearing rows adds a bonus that
//! doubles per row: `LINE_BONUS_BASE * 2^rows`.
//!
//! | Rows | Lock | Bonus | Total |
//! |------|------|-------|-------|
//! | 0 | 25 | 0 | 25 |
//! | 1 | 25 | 200 | 225 |
//! | 2 | 25 | 400 | 425 |
//! | 3 | 25 | 800 | 825 |
//! | 4 | 25 | 1600 | 1625 |

use crate::types::{LINE_BONUS_BASE, LOCK_SCORE};

/// Points awarded for one lock that cleared `rows` rows
pub fn lock_score(rows: usize) -> u32 {
    if rows == 0 {
        LOCK_SCORE
    } else {
        LOCK_SCORE + LINE_BONUS_BASE * (1u32 << rows)
    }
}

/// Descent cadence after the `pieces_locked`-th lock.
///
/// Every `per_speedup` locks the cadence drops by one tick, never below `floor`.
pub fn descent_ticks_after_lock(
    current: u32,
    pieces_locked: u32,
    per_speedup: u32,
    floor: u32,
) -> u32 {
    if per_speedup > 0 && pieces_locked % per_speedup == 0 && current > floor {
        current - 1
    } else {
        current
    }
}
