//! Core engine types: board, directions, configuration, errors, RNG.
//!
//! This module contains the fundamental building blocks shared by the
//! move rules, the game session, and the RL adapter.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use board::{can_merge, is_valid_tile, Board, Tile, MAX_TILE};
pub use config::{GameConfig, DEFAULT_HEIGHT, DEFAULT_PROB_4, DEFAULT_WIDTH};
pub use direction::Direction;
pub use error::{GameError, GameResult};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
