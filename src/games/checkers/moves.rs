//! Checkers move type and legal-move generation.

use std::fmt;

use crate::env::{token_for, Move, Token};

/// Board side length.
pub const SIZE: usize = 8;
/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Diagonal directions in generation order.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Flat index of `(row, col)`.
#[inline]
pub fn index((row, col): (usize, usize)) -> usize {
    SIZE * row + col
}

/// `(row, col)` moved `dist` steps along `(dr, dc)`, if still on the board.
#[inline]
fn offset(
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
    dist: isize,
) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr * dist)?;
    let c = col.checked_add_signed(dc * dist)?;
    (r < SIZE && c < SIZE).then_some((r, c))
}

/// Whether a piece may make a simple move with row delta `dr`.
///
/// Men of player 0 (`+1`) advance toward higher rows, men of player 1
/// (`-1`) toward lower rows. Kings go either way.
#[inline]
fn may_advance(piece: Token, dr: isize) -> bool {
    match piece {
        1 => dr > 0,
        -1 => dr < 0,
        _ => true,
    }
}

/// A move from one cell to another, either a one-step slide or a two-step
/// jump over an opposing piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckersMove {
    /// Source `(row, col)`.
    pub from: (usize, usize),
    /// Destination `(row, col)`.
    pub to: (usize, usize),
}

impl CheckersMove {
    /// Create a move.
    pub fn new(from: (usize, usize), to: (usize, usize)) -> Self {
        Self { from, to }
    }

    /// True if the move spans two rows.
    pub fn is_capture(&self) -> bool {
        self.from.0.abs_diff(self.to.0) == 2
    }

    /// Cell of the captured piece, for capturing moves.
    pub fn jumped(&self) -> Option<(usize, usize)> {
        self.is_capture()
            .then(|| ((self.from.0 + self.to.0) / 2, (self.from.1 + self.to.1) / 2))
    }

    pub(crate) fn on_board(&self) -> bool {
        let inside = |(r, c): (usize, usize)| r < SIZE && c < SIZE;
        inside(self.from) && inside(self.to)
    }
}

impl Move for CheckersMove {}

impl fmt::Display for CheckersMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})->({},{})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// All legal moves for `turn` on `board`.
///
/// Cells are scanned row-major. For each piece of the side to move, the
/// simple moves come first (filtered by direction for men), then captures
/// in all four directions. A single jump ends the move.
pub fn generate(board: &[Token; CELLS], turn: usize) -> Vec<CheckersMove> {
    let token = token_for(turn);
    let mut moves = Vec::new();

    for row in 0..SIZE {
        for col in 0..SIZE {
            let from = (row, col);
            let piece = board[index(from)];
            if piece != token && piece != 2 * token {
                continue;
            }

            for &dir in &DIAGONALS {
                if !may_advance(piece, dir.0) {
                    continue;
                }
                if let Some(to) = offset(from, dir, 1) {
                    if board[index(to)] == 0 {
                        moves.push(CheckersMove::new(from, to));
                    }
                }
            }

            for &dir in &DIAGONALS {
                if let (Some(over), Some(to)) = (offset(from, dir, 1), offset(from, dir, 2)) {
                    if board[index(to)] == 0 && board[index(over)] * piece < 0 {
                        moves.push(CheckersMove::new(from, to));
                    }
                }
            }
        }
    }

    moves
}
