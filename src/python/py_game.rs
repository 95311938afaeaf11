//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{Board, GameConfig, GameRng};
use crate::games::twenty48::Game2048;

use super::to_py_err;

/// Board as an `int64` numpy array of shape `(height, width)`.
///
/// A `MAX_TILE` cell does not fit in `int64` and is exported as `i64::MAX`.
pub(crate) fn board_to_numpy<'py>(py: Python<'py>, board: &Board) -> PyResult<Bound<'py, PyArray2<i64>>> {
    let cells: Vec<i64> = board
        .cells()
        .iter()
        .map(|&v| i64::try_from(v).unwrap_or(i64::MAX))
        .collect();
    PyArray1::from_vec_bound(py, cells)
        .reshape([board.height(), board.width()])
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
}

/// Python wrapper for Game2048.
///
/// Mirrors the attribute surface RL wrappers and key-driven players use:
/// `board`, `score`, `game_over`, `width`, `height` and `one_turn(action)`.
#[pyclass(name = "Game2048")]
pub struct PyGame2048 {
    game: Game2048<GameRng>,
}

#[pymethods]
impl PyGame2048 {
    /// Create a new game.
    ///
    /// # Arguments
    /// - width, height: Board dimensions (>= 1)
    /// - prob_4: Probability that a spawned tile is a 4
    /// - seed: RNG seed for deterministic games
    #[new]
    #[pyo3(signature = (width = 4, height = 4, prob_4 = 0.1, seed = 42))]
    fn new(width: usize, height: usize, prob_4: f64, seed: u64) -> PyResult<Self> {
        let game = Game2048::new(GameConfig::new(width, height, prob_4), GameRng::new(seed))
            .map_err(to_py_err)?;
        Ok(Self { game })
    }

    /// Apply an action (0 = up, 1 = left, 2 = down, 3 = right).
    ///
    /// Returns the score gained by the move.
    fn one_turn(&mut self, action: i64) -> PyResult<u64> {
        let outcome = self.game.one_turn(action).map_err(to_py_err)?;
        Ok(outcome.score_delta)
    }

    /// Start over with a fresh board.
    fn reset(&mut self) {
        self.game.reset();
    }

    /// Actions that would change the board.
    fn legal_actions(&self) -> Vec<usize> {
        self.game.legal_moves().into_iter().map(|d| d.index()).collect()
    }

    #[getter]
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i64>>> {
        board_to_numpy(py, self.game.board())
    }

    #[getter]
    fn score(&self) -> u64 {
        self.game.score()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.game.is_over()
    }

    #[getter]
    fn width(&self) -> usize {
        self.game.width()
    }

    #[getter]
    fn height(&self) -> usize {
        self.game.height()
    }

    fn __repr__(&self) -> String {
        let status = if self.game.is_over() { "over" } else { "playing" };
        format!(
            "Game2048({}x{}, score={}, status={})",
            self.game.width(),
            self.game.height(),
            self.game.score(),
            status
        )
    }

    fn __str__(&self) -> String {
        self.game.to_string()
    }
}
