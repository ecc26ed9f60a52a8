//! # Board Envs
//!
//! Deterministic two-player board-game environments meant to sit beneath a
//! game-tree search such as Monte Carlo Tree Search.
//!
//! Every environment owns a flat board, a turn flag and a terminal flag, and
//! advances exactly one ply per `step`. Each step returns the reward pair
//! `(player 0, player 1)`, which is `(0, 0)` until someone wins.
//!
//! ## Games
//!
//! - **Tic-tac-toe**: 3×3
//! - **Connect Four**: 6×7, tokens fall to the lowest free cell
//! - **Checkers**: 8×8, single jumps, crowning on the back rank
//!
//! ## Quick Start
//!
//! ```
//! use board_envs::{CheckersEnv, Environment, Rewards};
//!
//! let mut env = CheckersEnv::new();
//! let mv = env.moves()[0];
//! assert_eq!(env.step(mv), Rewards::NONE);
//! assert_eq!(env.turn(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`env`]: the shared `Environment` trait, rewards and errors
//! - [`games`]: the three environments
//! - [`playout`]: random playouts over any environment
//!
//! ## Architecture
//!
//! ```text
//!          ┌──────────────────────────────────────────┐
//!          │   Caller (search driver, playout loop)   │
//!          │   reset / step / legal_moves / board     │
//!          └──────────────────────────────────────────┘
//!                              │
//!                              │ Environment trait
//!                              ▼
//!         ┌────────────────────┼────────────────────┐
//!         │                    │                    │
//!         ▼                    ▼                    ▼
//!   ┌───────────┐       ┌─────────────┐       ┌──────────┐
//!   │ TicTacToe │       │ ConnectFour │       │ Checkers │
//!   └───────────┘       └─────────────┘       └──────────┘
//! ```

#![warn(missing_docs)]

/// Shared environment interface.
pub mod env;

/// Game implementations.
pub mod games;

/// Random playout driver.
pub mod playout;

// Re-export commonly used types at crate root for convenience
pub use env::{Environment, Move, Rewards, StepError, Token};
pub use games::checkers::{CheckersEnv, CheckersMove};
pub use games::connect_four::{ConnectFourEnv, ConnectFourMove};
pub use games::tictactoe::{TicTacToeEnv, TicTacToeMove};
pub use playout::{random_playout, run_playouts, PlayoutConfig, PlayoutStats};
