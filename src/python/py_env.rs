//! RL environment bindings for Python.

use numpy::PyArray2;
use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::env::{Env2048, EnvConfig, TimeStep, DEFAULT_DISCOUNT, DEFAULT_PENALTY};

use super::py_game::board_to_numpy;
use super::to_py_err;

type PyTimeStep<'py> = (u8, f64, f64, Bound<'py, PyArray2<i64>>);

/// Python wrapper for Env2048.
///
/// `reset()` and `step(action)` return `(step_type, reward, discount,
/// observation)` tuples with step types 0 (first), 1 (mid), 2 (last).
#[pyclass(name = "Env2048")]
pub struct PyEnv2048 {
    env: Env2048,
}

impl PyEnv2048 {
    fn to_tuple<'py>(&self, py: Python<'py>, step: &TimeStep) -> PyResult<PyTimeStep<'py>> {
        let observation = board_to_numpy(py, self.env.game().board())?;
        Ok((step.step_type as u8, step.reward, step.discount, observation))
    }
}

#[pymethods]
impl PyEnv2048 {
    #[new]
    #[pyo3(signature = (
        width = 4,
        height = 4,
        prob_4 = 0.1,
        discount = DEFAULT_DISCOUNT,
        penalty = DEFAULT_PENALTY,
        seed = 42
    ))]
    fn new(width: usize, height: usize, prob_4: f64, discount: f64, penalty: f64, seed: u64) -> PyResult<Self> {
        let config = EnvConfig::default()
            .with_game(GameConfig::new(width, height, prob_4))
            .with_discount(discount)
            .with_penalty(penalty);
        let env = Env2048::new(config, seed).map_err(to_py_err)?;
        Ok(Self { env })
    }

    fn reset<'py>(&mut self, py: Python<'py>) -> PyResult<PyTimeStep<'py>> {
        let step = self.env.reset();
        self.to_tuple(py, &step)
    }

    fn step<'py>(&mut self, py: Python<'py>, action: i64) -> PyResult<PyTimeStep<'py>> {
        let step = self.env.step(action).map_err(to_py_err)?;
        self.to_tuple(py, &step)
    }

    /// Observation shape as (rows, columns).
    fn observation_shape(&self) -> (usize, usize) {
        self.env.observation_shape()
    }

    #[getter]
    fn action_count(&self) -> usize {
        self.env.action_count()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.env.game().score()
    }

    #[getter]
    fn episode_return(&self) -> f64 {
        self.env.episode_return()
    }

    fn __repr__(&self) -> String {
        format!(
            "Env2048(episodes={}, steps={}, return={:.1})",
            self.env.episodes(),
            self.env.episode_length(),
            self.env.episode_return()
        )
    }
}
