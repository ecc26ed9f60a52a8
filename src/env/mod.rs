//! The environment interface shared by every game in the crate.
//!
//! An environment is a mutable board with a turn flag and a terminal flag.
//! Callers (a search driver, a playout loop, a test) pick a move, call
//! `step`, and read the board, turn and rewards back. The environment never
//! calls into its caller.
//!
//! # Usage
//!
//! ```
//! use board_envs::env::{Environment, Rewards};
//! use board_envs::games::tictactoe::{TicTacToeEnv, TicTacToeMove};
//!
//! let mut env = TicTacToeEnv::new();
//! let rewards = env.step(TicTacToeMove::new(1, 1));
//! assert_eq!(rewards, Rewards::NONE);
//! assert_eq!(env.turn(), 1);
//! ```

pub mod environment;
pub mod error;

pub use environment::{opponent, token_for, Environment, Move, Rewards, Token};
pub use error::StepError;
