//! Checkers on an 8×8 board.
//!
//! ## Rules
//!
//! - Pieces sit on cells where `row + col` is odd. Player 0 (`+1`) starts on
//!   rows 0-2 and advances toward row 7; player 1 (`-1`) starts on rows 5-7
//!   and advances toward row 0.
//! - Men slide one cell diagonally forward. Kings (`±2`) slide in any
//!   diagonal direction.
//! - Any piece may jump an adjacent opposing piece onto the empty cell
//!   behind it, in any diagonal direction. The jumped piece is removed.
//! - A jump ends the turn even if another jump is available from the
//!   landing cell.
//! - A man reaching row 0 or row 7 is crowned.
//! - A side with no legal move loses.
//!
//! Captures are not forced: the legal-move set offers slides and jumps side
//! by side.
//!
//! ## Move set
//!
//! The legal-move set is rebuilt from scratch after every step and is the
//! only legality oracle. [`CheckersEnv::step`](crate::env::Environment::step)
//! trusts its input; use `try_step` to check it against the set first.

pub mod moves;

pub use moves::{generate, CheckersMove, CELLS, SIZE};

use crate::env::{opponent, token_for, Environment, Rewards, StepError, Token};
use self::moves::index;

/// Checkers environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckersEnv {
    board: [Token; CELLS],
    turn: usize,
    done: bool,
    moves: Vec<CheckersMove>,
}

impl Default for CheckersEnv {
    fn default() -> Self {
        Self::from_position(Self::initial_board(), 0)
    }
}

impl CheckersEnv {
    /// Create the starting position with player 0 to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arbitrary position and generate its legal moves.
    ///
    /// A position in which the side to move has no legal move is returned
    /// as already finished.
    pub fn from_position(board: [Token; CELLS], turn: usize) -> Self {
        debug_assert!(turn < 2, "turn must be 0 or 1");
        debug_assert!(
            board.iter().all(|cell| (-2..=2).contains(cell)),
            "board holds a token outside -2..=2"
        );

        let moves = generate(&board, turn);
        Self {
            board,
            turn,
            done: moves.is_empty(),
            moves,
        }
    }

    fn initial_board() -> [Token; CELLS] {
        let mut board = [0; CELLS];
        for row in 0..SIZE {
            for col in 0..SIZE {
                if (row + col) % 2 == 0 {
                    continue;
                }
                if row < 3 {
                    board[index((row, col))] = 1;
                } else if row > 4 {
                    board[index((row, col))] = -1;
                }
            }
        }
        board
    }

    /// Token at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Token {
        self.board[index((row, col))]
    }

    /// The current legal-move set, in generation order.
    pub fn moves(&self) -> &[CheckersMove] {
        &self.moves
    }

    /// Number of kings owned by `player`.
    pub fn kings(&self, player: usize) -> usize {
        let king = 2 * token_for(player);
        self.board.iter().filter(|&&cell| cell == king).count()
    }

    /// Number of uncrowned men owned by `player`.
    pub fn men(&self, player: usize) -> usize {
        let man = token_for(player);
        self.board.iter().filter(|&&cell| cell == man).count()
    }
}

impl Environment for CheckersEnv {
    type Move = CheckersMove;

    const NAME: &'static str = "checkers";
    const CELLS: usize = CELLS;

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn step(&mut self, mv: CheckersMove) -> Rewards {
        if let Some(jumped) = mv.jumped() {
            self.board[index(jumped)] = 0;
        }
        let piece = self.board[index(mv.from)];
        let back_rank = mv.to.0 == 0 || mv.to.0 == SIZE - 1;
        self.board[index(mv.to)] = if back_rank && piece.abs() == 1 {
            2 * piece
        } else {
            piece
        };
        self.board[index(mv.from)] = 0;

        self.turn = opponent(self.turn);
        self.moves = generate(&self.board, self.turn);

        if self.moves.is_empty() {
            self.done = true;
            return Rewards::win_for(opponent(self.turn));
        }
        Rewards::NONE
    }

    fn validate(&self, mv: &CheckersMove) -> Result<(), StepError> {
        if self.done {
            return Err(StepError::GameOver);
        }
        if !mv.on_board() {
            return Err(StepError::OutOfBounds(mv.to_string()));
        }
        if !self.moves.contains(mv) {
            return Err(StepError::IllegalMove(mv.to_string()));
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

    fn legal_moves(&self) -> Vec<CheckersMove> {
        self.moves.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (usize, usize), to: (usize, usize)) -> CheckersMove {
        CheckersMove::new(from, to)
    }

    fn position(pieces: &[((usize, usize), Token)]) -> [Token; CELLS] {
        let mut board = [0; CELLS];
        for &(cell, token) in pieces {
            board[index(cell)] = token;
        }
        board
    }

    #[test]
    fn test_initial_position() {
        let env = CheckersEnv::new();
        assert_eq!(env.turn(), 0);
        assert!(!env.is_done());
        assert_eq!(env.men(0), 12);
        assert_eq!(env.men(1), 12);
        assert_eq!(env.at(0, 1), 1);
        assert_eq!(env.at(2, 7), 1);
        assert_eq!(env.at(5, 0), -1);
        assert_eq!(env.at(7, 6), -1);
        assert_eq!(env.at(0, 0), 0);
        assert!((0..SIZE).all(|c| env.at(3, c) == 0 && env.at(4, c) == 0));

        assert_eq!(
            env.moves(),
            &[
                mv((2, 1), (3, 0)),
                mv((2, 1), (3, 2)),
                mv((2, 3), (3, 2)),
                mv((2, 3), (3, 4)),
                mv((2, 5), (3, 4)),
                mv((2, 5), (3, 6)),
                mv((2, 7), (3, 6)),
            ]
        );
    }

    #[test]
    fn test_simple_move_switches_turn() {
        let mut env = CheckersEnv::new();
        let rewards = env.step(mv((2, 7), (3, 6)));
        assert_eq!(rewards, Rewards::NONE);
        assert_eq!(env.turn(), 1);
        assert!(!env.is_done());
        assert_eq!(env.at(2, 7), 0);
        assert_eq!(env.at(3, 6), 1);
        assert_eq!(env.pieces(), 24);
        // Player 1's front row can now answer.
        assert_eq!(env.moves().len(), 7);
        assert!(env.moves().iter().all(|m| m.from.0 == 5));
    }

    #[test]
    fn test_capture_sequence() {
        let mut env = CheckersEnv::new();
        env.step(mv((2, 1), (3, 2)));
        env.step(mv((5, 4), (4, 3)));

        let capture = mv((3, 2), (5, 4));
        assert!(env.moves().contains(&capture));

        let rewards = env.step(capture);
        assert_eq!(rewards, Rewards::NONE);
        assert_eq!(env.at(4, 3), 0);
        assert_eq!(env.at(3, 2), 0);
        assert_eq!(env.at(5, 4), 1);
        assert_eq!(env.pieces(), 23);
        assert_eq!(env.men(1), 11);
        // Row 5 is not a back rank.
        assert_eq!(env.kings(0), 0);
        // The jump ends the turn.
        assert_eq!(env.turn(), 1);
    }

    #[test]
    fn test_capture_from_edge_column() {
        let board = position(&[((3, 0), 1), ((4, 1), -1), ((6, 3), -1)]);
        let mut env = CheckersEnv::from_position(board, 0);
        assert_eq!(env.moves(), &[mv((3, 0), (5, 2))]);

        env.step(mv((3, 0), (5, 2)));
        assert_eq!(env.at(4, 1), 0);
        assert_eq!(env.at(5, 2), 1);
        assert_eq!(env.kings(0), 0);
        assert!(!env.is_done());
        // (6,3) may now take the man back.
        assert!(env.moves().contains(&mv((6, 3), (4, 1))));
    }

    #[test]
    fn test_promotion_and_king_moves() {
        let board = position(&[((6, 1), 1), ((2, 5), -1)]);
        let mut env = CheckersEnv::from_position(board, 0);

        env.step(mv((6, 1), (7, 0)));
        assert_eq!(env.at(7, 0), 2);
        assert_eq!(env.kings(0), 1);
        assert_eq!(env.men(0), 0);

        env.step(mv((2, 5), (1, 4)));
        assert_eq!(env.moves(), &[mv((7, 0), (6, 1))]);

        env.step(mv((7, 0), (6, 1)));
        assert_eq!(env.at(6, 1), 2);

        // Crowning the other side on row 0.
        env.step(mv((1, 4), (0, 3)));
        assert_eq!(env.at(0, 3), -2);
        assert_eq!(env.kings(1), 1);
    }

    #[test]
    fn test_king_stays_king_on_back_rank() {
        let board = position(&[((6, 1), 2), ((2, 5), -1)]);
        let mut env = CheckersEnv::from_position(board, 0);
        env.step(mv((6, 1), (7, 2)));
        assert_eq!(env.at(7, 2), 2);
    }

    #[test]
    fn test_backward_capture_onto_back_rank_crowns() {
        let board = position(&[((2, 3), 1), ((1, 2), -1), ((7, 6), -1)]);
        let mut env = CheckersEnv::from_position(board, 0);
        let capture = mv((2, 3), (0, 1));
        assert!(env.moves().contains(&capture));

        env.step(capture);
        assert_eq!(env.at(0, 1), 2);
        assert_eq!(env.at(1, 2), 0);
    }

    #[test]
    fn test_capturing_last_piece_wins() {
        let board = position(&[((3, 0), 1), ((4, 1), -1)]);
        let mut env = CheckersEnv::from_position(board, 0);
        let rewards = env.step(mv((3, 0), (5, 2)));
        assert_eq!(rewards, Rewards::PLAYER0_WINS);
        assert!(env.is_done());
        assert_eq!(env.turn(), 1);
        assert!(env.legal_moves().is_empty());
    }

    #[test]
    fn test_player_zero_loses_when_wiped_out() {
        let board = position(&[((6, 1), 1), ((7, 0), -1), ((7, 2), -1)]);
        let mut env = CheckersEnv::from_position(board, 1);
        assert_eq!(
            env.moves(),
            &[mv((7, 0), (5, 2)), mv((7, 2), (6, 3)), mv((7, 2), (5, 0))]
        );

        let rewards = env.step(mv((7, 0), (5, 2)));
        assert_eq!(rewards, Rewards::PLAYER1_WINS);
        assert!(env.is_done());
        assert_eq!(env.at(5, 2), -1);
        assert_eq!(env.turn(), 0);
    }

    #[test]
    fn test_blocked_side_loses() {
        // Player 1's only man on (1,0) is boxed in by (0,1) and cannot jump.
        let board = position(&[((1, 0), -1), ((0, 1), 1), ((5, 4), 1)]);
        let mut env = CheckersEnv::from_position(board, 0);
        let rewards = env.step(mv((5, 4), (6, 5)));
        assert_eq!(rewards, Rewards::PLAYER0_WINS);
        assert!(env.is_done());
        assert_eq!(env.men(1), 1);
    }

    #[test]
    fn test_from_position_without_moves_is_done() {
        let board = position(&[((1, 0), -1), ((0, 1), 1)]);
        let env = CheckersEnv::from_position(board, 1);
        assert!(env.is_done());
    }

    #[test]
    fn test_try_step_checks_move_set() {
        let mut env = CheckersEnv::new();
        assert_eq!(
            env.try_step(mv((2, 1), (3, 1))),
            Err(StepError::IllegalMove("(2,1)->(3,1)".to_string()))
        );
        assert_eq!(
            env.try_step(mv((5, 0), (4, 1))),
            Err(StepError::IllegalMove("(5,0)->(4,1)".to_string()))
        );
        assert!(matches!(
            env.try_step(mv((7, 0), (8, 1))),
            Err(StepError::OutOfBounds(_))
        ));
        assert_eq!(env, CheckersEnv::new());

        assert_eq!(env.try_step(mv((2, 1), (3, 0))), Ok(Rewards::NONE));

        let board = position(&[((3, 0), 1), ((4, 1), -1)]);
        let mut env = CheckersEnv::from_position(board, 0);
        env.step(mv((3, 0), (5, 2)));
        assert_eq!(env.try_step(mv((5, 2), (6, 3))), Err(StepError::GameOver));
    }

    #[test]
    fn test_reset() {
        let mut env = CheckersEnv::new();
        env.step(mv((2, 1), (3, 2)));
        env.step(mv((5, 4), (4, 3)));
        env.step(mv((3, 2), (5, 4)));
        env.reset();
        assert_eq!(env, CheckersEnv::new());
    }
}
