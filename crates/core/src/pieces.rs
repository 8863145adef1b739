//! Pieces module - tetromino catalog and rotation mapping
//!
//! Every piece is a 4x4 boolean grid in row-major order (index = y * 4 + x).
//! Orientations are never stored: [`rotate`] maps a local cell of the rotated
//! piece back to an index into the canonical grid.

use crate::types::{PieceKind, Rotation};

/// Side length of the local piece box
pub const PIECE_SIZE: usize = 4;

/// Canonical 4x4 occupancy grid
pub type PieceGrid = [bool; PIECE_SIZE * PIECE_SIZE];

const fn parse_grid(rows: &[u8; 16]) -> PieceGrid {
    let mut grid = [false; 16];
    let mut i = 0;
    while i < 16 {
        grid[i] = rows[i] == b'X';
        i += 1;
    }
    grid
}

/// Canonical grids, indexed by piece id
static CATALOG: [PieceGrid; 7] = [
    // I
    parse_grid(b"..X...X...X...X."),
    // Z
    parse_grid(b"..X..XX..X......"),
    // S
    parse_grid(b".X...XX...X....."),
    // O
    parse_grid(b".....XX..XX....."),
    // T
    parse_grid(b"..X..XX...X....."),
    // L
    parse_grid(b".....XX...X...X."),
    // J
    parse_grid(b".....XX..X...X.."),
];

/// Canonical grid for a piece kind
pub fn grid(kind: PieceKind) -> &'static PieceGrid {
    &CATALOG[kind.id() as usize]
}

/// Map a local cell of a rotated piece to its index in the canonical grid.
///
/// `px` and `py` must be in 0..4.
#[inline(always)]
pub fn rotate(px: usize, py: usize, rotation: Rotation) -> usize {
    debug_assert!(px < PIECE_SIZE && py < PIECE_SIZE);
    match rotation {
        Rotation::North => py * 4 + px,
        Rotation::East => 12 + py - px * 4,
        Rotation::South => 15 - py * 4 - px,
        Rotation::West => 3 - py + px * 4,
    }
}

/// Whether local cell (px, py) is occupied for the given orientation
#[inline(always)]
pub fn is_occupied(kind: PieceKind, rotation: Rotation, px: usize, py: usize) -> bool {
    grid(kind)[rotate(px, py, rotation)]
}

/// Occupied local cells of a piece in one orientation, row by row
pub fn cells(kind: PieceKind, rotation: Rotation) -> impl Iterator<Item = (usize, usize)> {
    (0..PIECE_SIZE).flat_map(move |py| {
        (0..PIECE_SIZE)
            .filter(move |&px| is_occupied(kind, rotation, px, py))
            .map(move |px| (px, py))
    })
}
