//! JSON-lines session journal.
//!
//! The terminal belongs to the game while it runs, so diagnostics go to an
//! optional journal file instead: one JSON object per line, written as events
//! happen.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LockEvent;

/// One journal line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    SessionStart {
        seed: u32,
        field_width: u16,
        field_height: u16,
        tick_ms: u64,
    },
    Lock {
        piece: &'static str,
        x: i32,
        y: i32,
        rotation: u32,
        rows_cleared: u32,
        points: u32,
        score: u32,
        pieces_locked: u32,
        descent_ticks: u32,
        game_over: bool,
    },
    SessionEnd {
        reason: &'static str,
        score: u32,
        pieces_locked: u32,
        ticks: u64,
    },
}

impl From<&LockEvent> for JournalRecord {
    fn from(event: &LockEvent) -> Self {
        JournalRecord::Lock {
            piece: event.piece.kind.as_str(),
            x: event.piece.x,
            y: event.piece.y,
            rotation: event.piece.rotation.turns(),
            rows_cleared: event.rows_cleared,
            points: event.points,
            score: event.score,
            pieces_locked: event.pieces_locked,
            descent_ticks: event.descent_ticks,
            game_over: event.game_over,
        }
    }
}

/// Appends [`JournalRecord`]s to a writer, one per line
pub struct Journal {
    out: Box<dyn Write>,
    buf: Vec<u8>,
    records: u64,
}

impl Journal {
    pub fn new(out: impl Write + 'static) -> Self {
        Self {
            out: Box::new(out),
            buf: Vec::with_capacity(256),
            records: 0,
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn append_to(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    pub fn record(&mut self, record: &JournalRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.records += 1;
        Ok(())
    }

    pub fn record_lock(&mut self, event: &LockEvent) -> Result<()> {
        self.record(&JournalRecord::from(event))
    }

    /// Lines written so far
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for Journal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Journal")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
