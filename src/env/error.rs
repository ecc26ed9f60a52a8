//! Errors reported by validated steps.

/// Why a move was rejected by [`Environment::try_step`](crate::env::Environment::try_step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The game has already ended.
    GameOver,
    /// A coordinate lies outside the board.
    OutOfBounds(String),
    /// The target cell already holds a token.
    Occupied(String),
    /// The column has no free cell.
    ColumnFull(usize),
    /// The move is not in the current legal-move set.
    IllegalMove(String),
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::GameOver => write!(f, "Game is already over"),
            StepError::OutOfBounds(mv) => write!(f, "Move {} is outside the board", mv),
            StepError::Occupied(mv) => write!(f, "Cell {} is already occupied", mv),
            StepError::ColumnFull(col) => write!(f, "Column {} is full", col),
            StepError::IllegalMove(mv) => write!(f, "Move {} is not legal in this position", mv),
        }
    }
}

impl std::error::Error for StepError {}
