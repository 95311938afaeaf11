//! Reinforcement-learning environment adapter.
//!
//! Wraps a [`Game2048`](crate::Game2048) in the episodic step/reset
//! interface RL trainers expect:
//!
//! - `reset()` starts a new session and returns a `First` time step
//! - `step(action)` maps `0..=3` to Up/Left/Down/Right, rewards the score
//!   delta, and ends the episode with a fixed penalty when the board locks
//! - observations are the raw board rows

mod config;
mod environment;

pub use config::{EnvConfig, DEFAULT_DISCOUNT, DEFAULT_PENALTY};
pub use environment::{Env2048, StepType, TimeStep, ACTION_COUNT};
