//! Classic 2048.
//!
//! Tiles slide toward one edge of the board, equal neighbours merge once per
//! move, and every board-changing move spawns a 2 (or, with probability
//! `prob_4`, a 4) into a random empty cell. The game ends when no direction
//! changes the board.

mod game;

pub use game::{Game2048, Game2048Builder, GameStatus, MoveOutcome, Spawn, OPENING_TILES};
