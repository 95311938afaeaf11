//! 2048 game session.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction, GameConfig, GameError, GameResult, GameRng, RandomSource, Tile};
use crate::rules::{is_stuck, legal_moves, shift};

/// Number of tiles placed when a session starts.
pub const OPENING_TILES: usize = 2;

/// Session lifecycle. `Over` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Over,
}

/// A tile placed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// What a single move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Sum of merged tile values, 0 for a no-op.
    pub score_delta: Tile,

    /// False when nothing slid or merged.
    pub changed: bool,

    /// Tile spawned after a board-changing move.
    pub spawned: Option<Spawn>,

    /// `game_over` after this move.
    pub game_over: bool,
}

impl MoveOutcome {
    fn no_op(game_over: bool) -> Self {
        Self {
            score_delta: 0,
            changed: false,
            spawned: None,
            game_over,
        }
    }
}

/// A single 2048 session: board, score and terminal flag.
///
/// The session exclusively owns its board and random source. It is mutated
/// only through [`Game2048::apply_move`] (or its integer form
/// [`Game2048::one_turn`]) and [`Game2048::reset`].
///
/// ```
/// use rust_2048::{Direction, Game2048Builder};
///
/// let mut game = Game2048Builder::new().build(42).unwrap();
/// assert_eq!(game.board().tile_count(), 2);
///
/// let outcome = game.apply_move(Direction::Left);
/// assert!(game.score() >= outcome.score_delta);
/// ```
#[derive(Clone, Debug)]
pub struct Game2048<R = GameRng> {
    config: GameConfig,
    board: Board,
    score: Tile,
    game_over: bool,
    move_count: u64,
    rng: R,
}

/// Builder for creating a `Game2048`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Game2048Builder {
    config: GameConfig,
}

impl Game2048Builder {
    /// Start from the default 4x4 configuration with `prob_4 = 0.1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of columns.
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Number of rows.
    pub fn height(mut self, height: usize) -> Self {
        self.config.height = height;
        self
    }

    /// Probability that a spawned tile is a 4 rather than a 2.
    pub fn prob_4(mut self, prob_4: f64) -> Self {
        self.config.prob_4 = prob_4;
        self
    }

    /// Replace every setting at once.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a session on a seeded [`GameRng`].
    pub fn build(self, seed: u64) -> GameResult<Game2048<GameRng>> {
        Game2048::new(self.config, GameRng::new(seed))
    }

    /// Build a session on any random source.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> GameResult<Game2048<R>> {
        Game2048::new(self.config, rng)
    }
}

impl<R: RandomSource> Game2048<R> {
    /// Start a fresh session: empty board, two opening tiles, score 0.
    ///
    /// Fails with `InvalidConfiguration` on a zero dimension or a `prob_4`
    /// outside `[0, 1]`. A 1x1 board only has room for one opening tile.
    ///
    /// `game_over` always starts `false`, even when the opening tiles already
    /// lock the board (a 1x1 board, or two unequal tiles on a 1x2 or 2x1
    /// board). The first move on such a board is a no-op that reports it.
    pub fn new(config: GameConfig, rng: R) -> GameResult<Self> {
        config.validate()?;
        let mut game = Self {
            config,
            board: Board::zeroed(config.width, config.height),
            score: 0,
            game_over: false,
            move_count: 0,
            rng,
        };
        game.seed_opening();
        debug!(
            "new 2048 session {}x{} prob_4={}",
            config.width, config.height, config.prob_4
        );
        Ok(game)
    }

    /// Resume from an arbitrary position.
    ///
    /// The board must match the configured dimensions. `game_over` is
    /// evaluated immediately, so a stuck board starts out `Over`.
    pub fn from_board(config: GameConfig, board: Board, score: Tile, rng: R) -> GameResult<Self> {
        config.validate()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(GameError::config(format!(
                "board is {}x{}, config expects {}x{}",
                board.width(),
                board.height(),
                config.width,
                config.height
            )));
        }
        let game_over = is_stuck(&board);
        Ok(Self {
            config,
            board,
            score,
            game_over,
            move_count: 0,
            rng,
        })
    }

    /// Discard the current game and start over with the same configuration.
    ///
    /// The random source carries on from where it was.
    pub fn reset(&mut self) {
        self.board = Board::zeroed(self.config.width, self.config.height);
        self.score = 0;
        self.game_over = false;
        self.move_count = 0;
        self.seed_opening();
        debug!("session reset");
    }

    /// Start over on a new random source, e.g. a fresh per-episode fork.
    pub fn restart(&mut self, rng: R) {
        self.rng = rng;
        self.reset();
    }

    fn seed_opening(&mut self) {
        for _ in 0..OPENING_TILES {
            self.spawn_tile();
        }
    }

    /// Place a 2 or 4 in a uniformly chosen empty cell.
    ///
    /// The cell is drawn first, then the value. Returns `None` on a full board.
    fn spawn_tile(&mut self) -> Option<Spawn> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.rng.next_index(empty.len())];
        let value = if self.rng.next_float() < self.config.prob_4 { 4 } else { 2 };
        self.board.set(row, col, value);
        trace!("spawned {value} at ({row}, {col})");
        Some(Spawn { row, col, value })
    }

    /// Slide the board in `direction`.
    ///
    /// A board-changing move adds merged values to the score and spawns one
    /// tile. A no-op move (including any move once the game is over) leaves
    /// everything untouched and draws no random numbers.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.game_over {
            trace!("ignoring {direction} on finished game");
            return MoveOutcome::no_op(true);
        }

        let shifted = shift(&self.board, direction);
        if !shifted.changed {
            self.update_game_over();
            trace!("{direction} is a no-op");
            return MoveOutcome::no_op(self.game_over);
        }

        self.board = shifted.board;
        self.score = self.score.saturating_add(shifted.gained);
        self.move_count += 1;
        let spawned = self.spawn_tile();
        self.update_game_over();

        trace!(
            "{direction}: +{} (score {}), move {}",
            shifted.gained,
            self.score,
            self.move_count
        );

        MoveOutcome {
            score_delta: shifted.gained,
            changed: true,
            spawned,
            game_over: self.game_over,
        }
    }

    /// Integer entry point: `0 = Up`, `1 = Left`, `2 = Down`, `3 = Right`.
    ///
    /// Fails with `InvalidDirection` otherwise, leaving the board unchanged.
    pub fn one_turn(&mut self, action: i64) -> GameResult<MoveOutcome> {
        let direction = Direction::try_from(action)?;
        Ok(self.apply_move(direction))
    }

    fn update_game_over(&mut self) {
        if !self.game_over && is_stuck(&self.board) {
            self.game_over = true;
            debug!(
                "game over after {} moves: score {}, max tile {}",
                self.move_count,
                self.score,
                self.board.max_tile()
            );
        }
    }
}

impl<R> Game2048<R> {
    /// Current grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> Tile {
        self.score
    }

    /// True once no move can change the board.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Over
        } else {
            GameStatus::Playing
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.config.height
    }

    /// Board-changing moves made since the session started.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Directions that would change the board, empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        if self.game_over {
            return Vec::new();
        }
        legal_moves(&self.board)
    }
}

impl<R> std::fmt::Display for Game2048<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "SCORE: {}", self.score)
    }
}
