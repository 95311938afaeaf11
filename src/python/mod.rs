//! Python bindings for the 2048 engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Game2048(width=4, height=4, prob_4=0.1, seed=42)
//! while not game.game_over:
//!     game.one_turn(game.legal_actions()[0])
//! print(game.score, game.board)
//!
//! env = rust_2048.Env2048(seed=7)
//! step_type, reward, discount, obs = env.reset()
//! step_type, reward, discount, obs = env.step(1)
//! ```

use pyo3::prelude::*;

use crate::core::GameError;

mod py_env;
mod py_game;

pub use py_env::*;
pub use py_game::*;

pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// rust_2048: 2048 simulation engine and RL environment.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame2048>()?;
    m.add_class::<PyEnv2048>()?;
    Ok(())
}
