//! RL environment configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameError, GameResult};

/// Per-step discount. One point twenty moves later is worth half a point now.
pub const DEFAULT_DISCOUNT: f64 = 0.966;

/// Subtracted from the reward of the step that ends an episode.
pub const DEFAULT_PENALTY: f64 = 1000.0;

/// Configuration for [`Env2048`](super::Env2048).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Board dimensions and spawn probability for every episode.
    pub game: GameConfig,

    /// Discount reported on every time step, in `[0, 1]`.
    pub discount: f64,

    /// Terminal penalty, finite and non-negative.
    pub penalty: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            discount: DEFAULT_DISCOUNT,
            penalty: DEFAULT_PENALTY,
        }
    }
}

impl EnvConfig {
    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    #[must_use]
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    #[must_use]
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn validate(&self) -> GameResult<()> {
        self.game.validate()?;
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(GameError::config(format!(
                "discount must be within [0, 1], got {}",
                self.discount
            )));
        }
        if !self.penalty.is_finite() || self.penalty < 0.0 {
            return Err(GameError::config(format!(
                "penalty must be finite and non-negative, got {}",
                self.penalty
            )));
        }
        Ok(())
    }
}
