//! Playfield module - the walled grid pieces fall into
//!
//! The field is a flat row-major array of [`Cell`]s. Columns 0 and width-1
//! and the bottom row are [`Cell::Border`] for the whole life of the field,
//! which is what keeps pieces inside: the collision check only ever looks at
//! in-bounds cells.
//!
//! Coordinates: (x, y) with x growing right and y growing down, (0, 0) at
//! the top-left wall cell.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::pieces::{self, PIECE_SIZE};
use crate::types::{Cell, PieceKind, Rotation};

/// Row indices marked for clearing by a single lock (at most one per piece row)
pub type ClearedRows = ArrayVec<usize, PIECE_SIZE>;

/// The playfield: borders plus a mutable interior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Playfield {
    /// Create a field with walls and floor in place and an empty interior
    pub fn new(config: &GameConfig) -> Self {
        let width = config.field_width as usize;
        let height = config.field_height as usize;
        let mut cells = vec![Cell::Empty; width * height];
        for y in 0..height {
            for x in 0..width {
                if x == 0 || x == width - 1 || y == height - 1 {
                    cells[y * width + x] = Cell::Border;
                }
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    #[inline(always)]
    fn is_interior(&self, x: i32, y: i32) -> bool {
        x > 0 && y >= 0 && (x as usize) < self.width - 1 && (y as usize) < self.height - 1
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite an interior cell.
    ///
    /// Returns false (and changes nothing) for walls, floor and out-of-bounds
    /// positions, which keeps the border permanent.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if !self.is_interior(x, y) {
            return false;
        }
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece can occupy the 4x4 box whose top-left corner is (x, y).
    ///
    /// Only occupied piece cells that land inside the field are checked; a cell
    /// hanging outside the field is not a collision on its own. Walls and
    /// floor are occupied, so any piece pushed into or past them fails here.
    pub fn fits(&self, kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> bool {
        for py in 0..PIECE_SIZE {
            for px in 0..PIECE_SIZE {
                if !pieces::is_occupied(kind, rotation, px, py) {
                    continue;
                }
                if let Some(cell) = self.get(x + px as i32, y + py as i32) {
                    if !cell.is_empty() {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Write a piece into the field as locked cells.
    ///
    /// Cells that would fall outside the interior are skipped.
    pub fn lock(&mut self, kind: PieceKind, rotation: Rotation, x: i32, y: i32) {
        for (px, py) in pieces::cells(kind, rotation) {
            self.set(x + px as i32, y + py as i32, Cell::Locked(kind));
        }
    }

    /// Check if every interior cell of a row is non-empty
    pub fn is_row_full(&self, y: usize) -> bool {
        if y + 1 >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start + 1..start + self.width - 1]
            .iter()
            .all(|cell| !cell.is_empty())
    }

    /// Mark full rows among the four spanned by a piece box at row `top`.
    ///
    /// Marked rows have their interior set to [`Cell::Marked`]. Returns the
    /// marked row indices, top to bottom.
    pub fn mark_full_rows(&mut self, top: i32) -> ClearedRows {
        let mut rows = ClearedRows::new();
        for py in 0..PIECE_SIZE as i32 {
            let y = top + py;
            if y < 0 || y as usize + 1 >= self.height {
                continue;
            }
            let y = y as usize;
            if self.is_row_full(y) {
                let start = y * self.width;
                self.cells[start + 1..start + self.width - 1].fill(Cell::Marked);
                rows.push(y);
            }
        }
        rows
    }

    /// Remove a row: every interior cell above it shifts down one row and the
    /// top interior row becomes empty. Border columns are never touched.
    pub fn collapse_row(&mut self, y: usize) {
        if y + 1 >= self.height {
            return;
        }
        let width = self.width;
        for x in 1..width - 1 {
            for row in (1..=y).rev() {
                self.cells[row * width + x] = self.cells[(row - 1) * width + x];
            }
            self.cells[x] = Cell::Empty;
        }
    }

    /// Collapse rows in the order given (top to bottom, as marked)
    pub fn collapse_rows(&mut self, rows: &[usize]) {
        for &y in rows {
            self.collapse_row(y);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write occupancy codes into `out`, row-major
    pub fn write_codes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|c| c.code()));
    }

    /// Render rows as strings of cell glyphs (walls as '#')
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
