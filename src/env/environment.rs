//! Environment trait definition.
//!
//! Any game that implements `Environment` can be driven by the playout
//! runner or by an external search. Each variant supplies its own move shape
//! and legality rules; the board, turn and terminal flag read the same way
//! for all of them.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::ops::AddAssign;

use crate::env::error::StepError;

/// Integer encoding of a cell's occupant.
///
/// `0` is empty, `+1`/`-1` a regular piece of player 0/1, `+2`/`-2` a
/// promoted piece (checkers only).
pub type Token = i8;

/// Token sign of the given player: `+1` for player 0, `-1` for player 1.
#[inline]
pub fn token_for(player: usize) -> Token {
    if player == 0 {
        1
    } else {
        -1
    }
}

/// The other player.
#[inline]
pub fn opponent(player: usize) -> usize {
    1 - player
}

/// Instantaneous reward pair returned by every `step`.
///
/// Always one of `(0, 0)`, `(1, -1)` or `(-1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rewards {
    /// Reward for player 0.
    pub player0: i8,
    /// Reward for player 1.
    pub player1: i8,
}

impl Rewards {
    /// Non-terminal step or draw.
    pub const NONE: Rewards = Rewards { player0: 0, player1: 0 };
    /// Player 0 won.
    pub const PLAYER0_WINS: Rewards = Rewards { player0: 1, player1: -1 };
    /// Player 1 won.
    pub const PLAYER1_WINS: Rewards = Rewards { player0: -1, player1: 1 };

    /// Reward pair for a win by `player`.
    pub fn win_for(player: usize) -> Self {
        if player == 0 {
            Self::PLAYER0_WINS
        } else {
            Self::PLAYER1_WINS
        }
    }

    /// Reward for a single player.
    pub fn for_player(&self, player: usize) -> i8 {
        if player == 0 {
            self.player0
        } else {
            self.player1
        }
    }

    /// True if someone won.
    pub fn is_decisive(&self) -> bool {
        self.player0 != 0
    }

    /// Index of the winning player, if any.
    pub fn winner(&self) -> Option<usize> {
        match self.player0.signum() {
            1 => Some(0),
            -1 => Some(1),
            _ => None,
        }
    }
}

impl AddAssign for Rewards {
    fn add_assign(&mut self, rhs: Self) {
        self.player0 += rhs.player0;
        self.player1 += rhs.player1;
    }
}

impl Display for Rewards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.player0, self.player1)
    }
}

/// Trait for moves accepted by an environment.
///
/// Moves are small value types; they are copied into and out of the
/// legal-move list and shown in error messages.
pub trait Move: Copy + Eq + Hash + Debug + Display + Send + Sync {}

/// The capability interface shared by the three games.
///
/// # Example
/// ```ignore
/// fn play_first<E: Environment>(env: &mut E) -> Rewards {
///     match env.legal_moves().first() {
///         Some(&mv) => env.step(mv),
///         None => Rewards::NONE,
///     }
/// }
/// ```
pub trait Environment: Clone + Debug + Send + Sync {
    /// The move shape for this game.
    type Move: Move;

    /// Short game name.
    const NAME: &'static str;

    /// Number of cells on the flat board.
    const CELLS: usize;

    /// Return to the fixed initial position: player 0 to move, not done.
    fn reset(&mut self);

    /// Apply one ply and return the reward pair.
    ///
    /// No validation is performed. Submitting a move that is off the board,
    /// targets an occupied cell or full column, or (for checkers) is absent
    /// from the current legal-move set leaves the environment in an
    /// unspecified state; out-of-range coordinates panic on indexing.
    /// Use [`Environment::try_step`] when input is not trusted.
    fn step(&mut self, mv: Self::Move) -> Rewards;

    /// Check that `mv` may be played in the current position.
    fn validate(&self, mv: &Self::Move) -> Result<(), StepError>;

    /// Validate `mv`, then apply it.
    ///
    /// On error the environment is unchanged.
    fn try_step(&mut self, mv: Self::Move) -> Result<Rewards, StepError> {
        self.validate(&mv)?;
        Ok(self.step(mv))
    }

    /// The flat board, row-major.
    fn board(&self) -> &[Token];

    /// Player to move (0 or 1).
    fn turn(&self) -> usize;

    /// Whether the game has ended.
    fn is_done(&self) -> bool;

    /// Moves the side to move may play. Empty once the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Token of the side to move.
    fn current_token(&self) -> Token {
        token_for(self.turn())
    }

    /// Number of occupied cells.
    fn pieces(&self) -> usize {
        self.board().iter().filter(|&&cell| cell != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewards_constants() {
        assert_eq!(Rewards::win_for(0), Rewards::PLAYER0_WINS);
        assert_eq!(Rewards::win_for(1), Rewards::PLAYER1_WINS);
        assert_eq!(Rewards::PLAYER0_WINS.winner(), Some(0));
        assert_eq!(Rewards::PLAYER1_WINS.winner(), Some(1));
        assert_eq!(Rewards::NONE.winner(), None);
        assert!(!Rewards::NONE.is_decisive());
        assert_eq!(Rewards::PLAYER1_WINS.for_player(1), 1);
    }

    #[test]
    fn test_rewards_accumulate() {
        let mut total = Rewards::NONE;
        total += Rewards::NONE;
        total += Rewards::PLAYER1_WINS;
        assert_eq!(total, Rewards::PLAYER1_WINS);
        assert_eq!(total.to_string(), "(-1, 1)");
    }

    #[test]
    fn test_tokens() {
        assert_eq!(token_for(0), 1);
        assert_eq!(token_for(1), -1);
        assert_eq!(opponent(0), 1);
        assert_eq!(opponent(1), 0);
    }
}
