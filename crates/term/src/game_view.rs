//! GameView: maps a [`GameSnapshot`] into a character framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout on the 80x30 screen:
//!
//! - field cell (x, y) at screen (x + 2, y + 2)
//! - occupancy codes as `" ABCDEFG=#"`, the falling piece as `'A' + id`
//! - `SCORE: ` plus the score padded to 8 columns, two columns right of the field

use crate::core::pieces;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind, FIELD_DRAW_OFFSET, SCREEN_HEIGHT, SCREEN_WIDTH};

const BORDER: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160));
const MARKED: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();

/// Renders the playfield, falling piece and score
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    origin_x: u16,
    origin_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            origin_x: FIELD_DRAW_OFFSET,
            origin_y: FIELD_DRAW_OFFSET,
        }
    }
}

impl GameView {
    /// Screen column of the score overlay for a field `field_width` wide
    pub fn score_column(&self, field_width: usize) -> u16 {
        self.origin_x
            .saturating_add(field_width as u16)
            .saturating_add(4)
    }

    pub fn score_row(&self) -> u16 {
        self.origin_y
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.clear();

        for y in 0..snap.height {
            for x in 0..snap.width {
                let code = snap.code_at(x, y);
                let (ch, style) = cell_look(code);
                fb.put_char(
                    self.origin_x.saturating_add(x as u16),
                    self.origin_y.saturating_add(y as u16),
                    ch,
                    style,
                );
            }
        }

        if let Some(active) = snap.active {
            let style = piece_style(active.kind);
            for (px, py) in pieces::cells(active.kind, active.rotation) {
                let x = active.x + px as i32;
                let y = active.y + py as i32;
                if x < 0 || y < 0 {
                    continue;
                }
                fb.put_char(
                    self.origin_x.saturating_add(x as u16),
                    self.origin_y.saturating_add(y as u16),
                    active.kind.letter(),
                    style,
                );
            }
        }

        let score = format!("SCORE: {:>8}", snap.score);
        fb.put_str(self.score_column(snap.width), self.score_row(), &score, LABEL);
    }

    /// Convenience helper that allocates a new screen-sized framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        self.render_into(snap, &mut fb);
        fb
    }
}

fn cell_look(code: u8) -> (char, CellStyle) {
    match Cell::from_code(code) {
        Some(Cell::Locked(kind)) => (kind.letter(), piece_style(kind)),
        Some(Cell::Marked) => ('=', MARKED),
        Some(Cell::Border) => ('#', BORDER),
        Some(Cell::Empty) | None => (' ', CellStyle::default()),
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
    };
    CellStyle::fg(fg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActiveSnapshot, GameState, Phase};
    use crate::types::Rotation;

    fn empty_snapshot() -> GameSnapshot {
        let mut snap = GameState::with_seed(1).snapshot();
        snap.active = None;
        snap
    }

    fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
        fb.get(x, y).map(|c| c.ch).unwrap_or('?')
    }

    #[test]
    fn test_field_is_drawn_at_offset() {
        let fb = GameView::default().render(&empty_snapshot());

        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 30);
        assert_eq!(ch(&fb, 1, 2), ' ');
        assert_eq!(ch(&fb, 2, 2), '#');
        assert_eq!(ch(&fb, 13, 2), '#');
        assert_eq!(ch(&fb, 3, 2), ' ');
        assert_eq!(&fb.row_text(19)[2..14], "############");
        assert_eq!(ch(&fb, 2, 1), ' ');
    }

    #[test]
    fn test_locked_and_marked_codes_map_to_glyphs() {
        let mut snap = empty_snapshot();
        let w = snap.width;
        snap.cells[16 * w + 1] = 1;
        snap.cells[16 * w + 2] = 7;
        snap.cells[15 * w + 1] = 8;

        let fb = GameView::default().render(&snap);
        assert_eq!(ch(&fb, 3, 18), 'A');
        assert_eq!(ch(&fb, 4, 18), 'G');
        assert_eq!(ch(&fb, 3, 17), '=');
        assert!(fb.get(3, 17).map(|c| c.style.bold).unwrap_or(false));
    }

    #[test]
    fn test_active_piece_drawn_with_letter() {
        let mut snap = empty_snapshot();
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::O,
            rotation: Rotation::North,
            x: 6,
            y: 0,
        });

        let fb = GameView::default().render(&snap);
        // Square cells at field (7..=8, 1..=2).
        for (x, y) in [(9, 3), (10, 3), (9, 4), (10, 4)] {
            assert_eq!(ch(&fb, x, y), 'D');
        }
        assert_eq!(ch(&fb, 9, 2), ' ');
    }

    #[test]
    fn test_active_cells_above_field_are_skipped() {
        let mut snap = empty_snapshot();
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: 3,
            y: -3,
        });

        let fb = GameView::default().render(&snap);
        // Only the bottom cell of the upright I is on the field.
        assert_eq!(ch(&fb, 7, 2), 'A');
        assert_eq!(ch(&fb, 7, 1), ' ');
    }

    #[test]
    fn test_score_overlay_right_of_field() {
        let mut snap = empty_snapshot();
        snap.score = 1625;

        let view = GameView::default();
        let fb = view.render(&snap);
        assert_eq!(view.score_column(12), 18);
        assert_eq!(&fb.row_text(2)[18..33], "SCORE:     1625");
    }

    #[test]
    fn test_render_into_clears_previous_frame() {
        let view = GameView::default();
        let mut snap = empty_snapshot();
        snap.cells[5 * snap.width + 5] = 3;
        let mut fb = view.render(&snap);
        assert_eq!(ch(&fb, 7, 7), 'C');

        snap.cells[5 * snap.width + 5] = 0;
        snap.phase = Phase::Running;
        view.render_into(&snap, &mut fb);
        assert_eq!(ch(&fb, 7, 7), ' ');
    }
}
