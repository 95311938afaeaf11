//! Episodic environment over a 2048 session.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameResult, GameRng, GameRngState, Tile};
use crate::games::twenty48::Game2048;

use super::config::EnvConfig;

/// Number of discrete actions (0 = Up, 1 = Left, 2 = Down, 3 = Right).
pub const ACTION_COUNT: usize = 4;

/// Position of a time step within an episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StepType {
    First = 0,
    Mid = 1,
    Last = 2,
}

impl StepType {
    #[must_use]
    pub fn is_last(self) -> bool {
        self == StepType::Last
    }
}

/// One environment transition as seen by an agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeStep {
    pub step_type: StepType,

    /// Score delta of the move, minus the penalty on the terminal step.
    pub reward: f64,

    pub discount: f64,

    /// Board rows with raw tile values.
    pub observation: Vec<Vec<Tile>>,
}

/// RL environment wrapping one [`Game2048`] per episode.
///
/// Each episode runs on its own fork of the root RNG, so a fixed seed
/// replays the same sequence of episodes.
#[derive(Debug)]
pub struct Env2048 {
    config: EnvConfig,
    rng: GameRng,
    game: Game2048<GameRng>,
    current: TimeStep,
    episode_return: f64,
    episode_length: usize,
    episodes: usize,
}

impl Env2048 {
    /// Create an environment and start its first episode.
    pub fn new(config: EnvConfig, seed: u64) -> GameResult<Self> {
        Self::from_rng(config, GameRng::new(seed))
    }

    /// Resume from a checkpoint taken with [`Env2048::rng_state`].
    ///
    /// The first episode is the one the checkpointed environment would have
    /// started on its next [`Env2048::reset`]. The episode counter restarts.
    pub fn from_rng_state(config: EnvConfig, state: &GameRngState) -> GameResult<Self> {
        Self::from_rng(config, GameRng::from_state(state))
    }

    fn from_rng(config: EnvConfig, mut rng: GameRng) -> GameResult<Self> {
        config.validate()?;
        let game = Game2048::new(config.game, rng.fork())?;
        let current = first_step(&config, &game);
        Ok(Self {
            config,
            rng,
            game,
            current,
            episode_return: 0.0,
            episode_length: 0,
            episodes: 1,
        })
    }

    /// Start a new episode and return its first time step.
    pub fn reset(&mut self) -> TimeStep {
        self.game.restart(self.rng.fork());
        self.current = first_step(&self.config, &self.game);
        self.episode_return = 0.0;
        self.episode_length = 0;
        self.episodes += 1;
        self.current.clone()
    }

    /// Apply an action.
    ///
    /// Fails with `InvalidDirection` for actions outside `0..=3`. Once an
    /// episode has ended every further step returns `Last` with zero reward
    /// until [`Env2048::reset`] is called.
    pub fn step(&mut self, action: i64) -> GameResult<TimeStep> {
        if self.current.step_type.is_last() {
            // Validate even when the episode is finished.
            Direction::try_from(action)?;
            self.current.reward = 0.0;
            return Ok(self.current.clone());
        }

        let score_before = self.game.score();
        let outcome = self.game.one_turn(action)?;
        let delta = (self.game.score() - score_before) as f64;

        let (step_type, reward) = if outcome.game_over {
            (StepType::Last, delta - self.config.penalty)
        } else {
            (StepType::Mid, delta)
        };

        self.episode_return += reward;
        self.episode_length += 1;
        self.current = TimeStep {
            step_type,
            reward,
            discount: self.config.discount,
            observation: self.game.board().to_rows(),
        };

        if step_type.is_last() {
            debug!(
                "episode {} finished: {} steps, return {:.1}, score {}",
                self.episodes,
                self.episode_length,
                self.episode_return,
                self.game.score()
            );
        }
        Ok(self.current.clone())
    }

    /// Checkpoint of the root RNG that seeds each episode.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The most recent time step.
    #[must_use]
    pub fn current_time_step(&self) -> &TimeStep {
        &self.current
    }

    /// Observation shape as `(rows, columns)`.
    #[must_use]
    pub fn observation_shape(&self) -> (usize, usize) {
        (self.config.game.height, self.config.game.width)
    }

    #[must_use]
    pub fn action_count(&self) -> usize {
        ACTION_COUNT
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The session backing the current episode.
    #[must_use]
    pub fn game(&self) -> &Game2048<GameRng> {
        &self.game
    }

    /// Sum of rewards since the last reset.
    #[must_use]
    pub fn episode_return(&self) -> f64 {
        self.episode_return
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub fn episode_length(&self) -> usize {
        self.episode_length
    }

    /// Episodes started, including the current one.
    #[must_use]
    pub fn episodes(&self) -> usize {
        self.episodes
    }
}

fn first_step(config: &EnvConfig, game: &Game2048<GameRng>) -> TimeStep {
    TimeStep {
        step_type: StepType::First,
        reward: 0.0,
        discount: config.discount,
        observation: game.board().to_rows(),
    }
}
