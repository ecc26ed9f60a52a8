//! Tic-tac-toe on a 3×3 board.
//!
//! ## Board
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```
//!
//! Player 0 places `+1`, player 1 places `-1`. A step only inspects the
//! lines through the cell just played: its row, its column, and a diagonal
//! when the cell lies on one.

use std::fmt;

use crate::env::{Environment, Move, Rewards, StepError, Token};

const SIZE: usize = 3;
const CELLS: usize = SIZE * SIZE;

#[inline]
fn index(row: usize, col: usize) -> usize {
    SIZE * row + col
}

/// A placement at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToeMove {
    /// Row, 0 = top.
    pub row: usize,
    /// Column, 0 = left.
    pub col: usize,
}

impl TicTacToeMove {
    /// Create a move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Move for TicTacToeMove {}

impl fmt::Display for TicTacToeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Tic-tac-toe environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeEnv {
    board: [Token; CELLS],
    turn: usize,
    done: bool,
    placements: usize,
}

impl Default for TicTacToeEnv {
    fn default() -> Self {
        Self {
            board: [0; CELLS],
            turn: 0,
            done: false,
            placements: 0,
        }
    }
}

impl TicTacToeEnv {
    /// Create an empty board with player 0 to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Token {
        self.board[index(row, col)]
    }

    /// Number of tokens placed since the last reset.
    pub fn placements(&self) -> usize {
        self.placements
    }

    fn completes_line(&self, row: usize, col: usize, token: Token) -> bool {
        let b = &self.board;
        let line = |cells: [usize; 3]| cells.iter().all(|&i| b[i] == token);

        line([index(row, 0), index(row, 1), index(row, 2)])
            || line([index(0, col), index(1, col), index(2, col)])
            || (row == col && line([0, 4, 8]))
            || (row + col == 2 && line([2, 4, 6]))
    }
}

impl Environment for TicTacToeEnv {
    type Move = TicTacToeMove;

    const NAME: &'static str = "tictactoe";
    const CELLS: usize = CELLS;

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn step(&mut self, mv: TicTacToeMove) -> Rewards {
        let token = self.current_token();
        self.board[index(mv.row, mv.col)] = token;
        self.placements += 1;

        if self.completes_line(mv.row, mv.col, token) {
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

    fn validate(&self, mv: &TicTacToeMove) -> Result<(), StepError> {
        if self.done {
            return Err(StepError::GameOver);
        }
        if mv.row >= SIZE || mv.col >= SIZE {
            return Err(StepError::OutOfBounds(mv.to_string()));
        }
        if self.at(mv.row, mv.col) != 0 {
            return Err(StepError::Occupied(mv.to_string()));
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

    fn legal_moves(&self) -> Vec<TicTacToeMove> {
        if self.done {
            return vec![];
        }
        (0..CELLS)
            .filter(|&i| self.board[i] == 0)
            .map(|i| TicTacToeMove::new(i / SIZE, i % SIZE))
            .collect()
    }
}
