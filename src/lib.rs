//! # rust-2048
//!
//! A 2048 board-game simulation engine for RL training.
//!
//! ## Design Principles
//!
//! 1. **Pure and synchronous**: No I/O, no global state. Every operation is
//!    O(width x height) and returns immediately.
//!
//! 2. **Injectable randomness**: Tile spawning draws from a `RandomSource`,
//!    so a seeded `GameRng` or a `ScriptedRng` makes any game reproducible.
//!
//! 3. **One merge routine**: All four directions run the same
//!    compact-and-merge over rows or columns read in travel order.
//!
//! ## Modules
//!
//! - `core`: Board, directions, configuration, errors, RNG
//! - `rules`: Line merging, whole-board shifts, terminal detection
//! - `games`: The `Game2048` session (board + score + game-over flag)
//! - `env`: Episodic RL adapter with score-delta rewards
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod env;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction, GameConfig, GameError, GameResult, GameRng, GameRngState, RandomSource,
    ScriptedRng, Tile, MAX_TILE,
};

pub use crate::rules::{can_move, is_stuck, legal_moves, shift, slide_line, Shifted};

pub use crate::games::twenty48::{Game2048, Game2048Builder, GameStatus, MoveOutcome, Spawn};

pub use crate::env::{Env2048, EnvConfig, StepType, TimeStep};
