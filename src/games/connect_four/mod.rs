//! Connect Four on a 6×7 board.
//!
//! Tokens fall to the lowest empty cell of the chosen column. Row 0 is the
//! top of the board, so a fresh column fills from row 5 upward.
//!
//! After each drop only the lines through the new token are examined. The
//! diagonal checks first slide the anchor back to the board edge along the
//! diagonal, then scan forward over windows that lie fully on the board.

use std::fmt;

use crate::env::{Environment, Move, Rewards, StepError, Token};

/// Number of rows.
pub const ROWS: usize = 6;
/// Number of columns.
pub const COLS: usize = 7;
const CELLS: usize = ROWS * COLS;

#[inline]
fn index(row: usize, col: usize) -> usize {
    COLS * row + col
}

/// Drop a token into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectFourMove(pub usize);

impl ConnectFourMove {
    /// Column index, 0 = left.
    pub fn col(self) -> usize {
        self.0
    }
}

impl Move for ConnectFourMove {}

impl fmt::Display for ConnectFourMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connect Four environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFourEnv {
    board: [Token; CELLS],
    turn: usize,
    done: bool,
    placements: usize,
}

impl Default for ConnectFourEnv {
    fn default() -> Self {
        Self {
            board: [0; CELLS],
            turn: 0,
            done: false,
            placements: 0,
        }
    }
}

impl ConnectFourEnv {
    /// Create an empty board with player 0 to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Token {
        self.board[index(row, col)]
    }

    /// Number of tokens dropped since the last reset.
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Lowest empty row in `col`, or `None` if the column is full.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.at(row, col) == 0)
    }

    fn four(&self, cells: [(usize, usize); 4], token: Token) -> bool {
        cells.iter().all(|&(r, c)| self.at(r, c) == token)
    }

    fn connects_four(&self, row: usize, col: usize, token: Token) -> bool {
        // Horizontal.
        for c in 0..=COLS - 4 {
            if self.four([(row, c), (row, c + 1), (row, c + 2), (row, c + 3)], token) {
                return true;
            }
        }

        // Vertical.
        for r in 0..=ROWS - 4 {
            if self.four([(r, col), (r + 1, col), (r + 2, col), (r + 3, col)], token) {
                return true;
            }
        }

        // Down-right diagonal, anchored at its top-left edge.
        let shift = row.min(col);
        let (r0, c0) = (row - shift, col - shift);
        for i in 0..3 {
            let (r, c) = (r0 + i, c0 + i);
            if r + 3 < ROWS
                && c + 3 < COLS
                && self.four([(r, c), (r + 1, c + 1), (r + 2, c + 2), (r + 3, c + 3)], token)
            {
                return true;
            }
        }

        // Up-right diagonal: every cell has row + col == sum.
        let sum = row + col;
        for r in (3..ROWS).rev() {
            if sum < r || sum - r > COLS - 4 {
                continue;
            }
            let c = sum - r;
            if self.four([(r, c), (r - 1, c + 1), (r - 2, c + 2), (r - 3, c + 3)], token) {
                return true;
            }
        }

        false
    }
}

impl Environment for ConnectFourEnv {
    type Move = ConnectFourMove;

    const NAME: &'static str = "connect_four";
    const CELLS: usize = CELLS;

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn step(&mut self, mv: ConnectFourMove) -> Rewards {
        let col = mv.col();
        let token = self.current_token();
        // A full column lands on the top cell.
        let row = self.drop_row(col).unwrap_or(0);
        self.board[index(row, col)] = token;
        self.placements += 1;

        if self.connects_four(row, col, token) {
            self.done = true;
            return Rewards::win_for(self.turn);
        }

        if self.placements == CELLS {
            self.done = true;
            return Rewards::NONE;
        }

        self.turn = 1 - self.turn;
        Rewards::NONE
    }

    fn validate(&self, mv: &ConnectFourMove) -> Result<(), StepError> {
        if self.done {
            return Err(StepError::GameOver);
        }
        if mv.col() >= COLS {
            return Err(StepError::OutOfBounds(mv.to_string()));
        }
        if self.drop_row(mv.col()).is_none() {
            return Err(StepError::ColumnFull(mv.col()));
        }
        Ok(())
    }

    fn board(&self) -> &[Token] {
        &self.board
    }

    fn turn(&self) -> usize {
        self.turn
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn legal_moves(&self) -> Vec<ConnectFourMove> {
        if self.done {
            return vec![];
        }
        (0..COLS)
            .filter(|&col| self.at(0, col) == 0)
            .map(ConnectFourMove)
            .collect()
    }
}
