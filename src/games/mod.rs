//! Game environments.
//!
//! Each module holds one variant of the [`Environment`](crate::env::Environment)
//! contract, with its own board size and move shape:
//!
//! - [`tictactoe`]: 3×3, moves are `(row, col)` placements
//! - [`connect_four`]: 6×7 with gravity, moves are column drops
//! - [`checkers`]: 8×8 with captures and crowning, moves are
//!   source/destination pairs drawn from a per-ply legal-move set
//!
//! The three modules do not depend on one another.

pub mod checkers;
pub mod connect_four;
pub mod tictactoe;
