//! Session configuration.
//!
//! A `GameConfig` fixes the board dimensions and the spawn probability for
//! the lifetime of a session. Validation happens once, when a session is
//! built from it.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Default board width.
pub const DEFAULT_WIDTH: usize = 4;

/// Default board height.
pub const DEFAULT_HEIGHT: usize = 4;

/// Default probability that a spawned tile is a 4.
pub const DEFAULT_PROB_4: f64 = 0.1;

/// Complete session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns (>= 1).
    pub width: usize,

    /// Number of rows (>= 1).
    pub height: usize,

    /// Probability that a spawned tile is 4 instead of 2, in `[0, 1]`.
    pub prob_4: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            prob_4: DEFAULT_PROB_4,
        }
    }
}

impl GameConfig {
    /// Create a configuration. Not validated until a session is built.
    #[must_use]
    pub fn new(width: usize, height: usize, prob_4: f64) -> Self {
        Self {
            width,
            height,
            prob_4,
        }
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_prob_4(mut self, prob_4: f64) -> Self {
        self.prob_4 = prob_4;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check dimensions and spawn probability.
    pub fn validate(&self) -> GameResult<()> {
        if self.width == 0 {
            return Err(GameError::config("width must be at least 1"));
        }
        if self.height == 0 {
            return Err(GameError::config("height must be at least 1"));
        }
        // NaN fails this check as well.
        if !(0.0..=1.0).contains(&self.prob_4) {
            return Err(GameError::config(format!(
                "prob_4 must be within [0, 1], got {}",
                self.prob_4
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 4);
        assert_eq!(config.height, 4);
        assert!((config.prob_4 - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.cell_count(), 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default().with_size(5, 3).with_prob_4(0.0);
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 3);
        assert_eq!(config.prob_4, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            GameConfig::new(0, 4, 0.1).validate(),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            GameConfig::new(4, 0, 0.1).validate(),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            assert!(GameConfig::new(4, 4, p).validate().is_err(), "accepted {p}");
        }
        assert!(GameConfig::new(4, 4, 1.0).validate().is_ok());
        assert!(GameConfig::new(1, 1, 0.0).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(3, 5, 0.25);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
