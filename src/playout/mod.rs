//! Random playouts: a generic caller written once against `Environment`.
//!
//! A playout plays uniformly random legal moves until the game ends, the
//! way a Monte Carlo search evaluates a leaf. [`run_playouts`] fans a batch
//! of playouts out over rayon, one environment clone per game.
//!
//! # Example
//!
//! ```
//! use board_envs::games::tictactoe::TicTacToeEnv;
//! use board_envs::playout::{run_playouts, PlayoutConfig};
//!
//! let config = PlayoutConfig::default().with_games(200).with_seed(42);
//! let stats = run_playouts(&TicTacToeEnv::new(), &config).unwrap();
//! assert_eq!(stats.games, 200);
//! println!("{}", stats.summary());
//! ```

pub mod config;
pub mod runner;

pub use config::{ConfigError, PlayoutConfig, PlayoutOutcome, PlayoutStats};
pub use runner::{random_playout, run_playouts};
