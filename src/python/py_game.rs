//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::FlamesConfig;
use crate::game::{FlamesGame, Reading};

use super::py_core::{to_py_err, PyCancellation};

/// Python wrapper for Reading.
#[pyclass(name = "Reading", frozen)]
#[derive(Clone, Debug)]
pub struct PyReading(pub Reading);

#[pymethods]
impl PyReading {
    /// Result letter.
    #[getter]
    fn result(&self) -> String {
        self.0.result.to_string()
    }

    /// Result label ("Friends", "Lovers", ...).
    #[getter]
    fn label(&self) -> &'static str {
        self.0.meaning.label
    }

    #[getter]
    fn emoji(&self) -> &'static str {
        self.0.meaning.emoji
    }

    #[getter]
    fn story(&self) -> &'static str {
        self.0.story
    }

    #[getter]
    fn remaining(&self) -> usize {
        self.0.remaining()
    }

    #[getter]
    fn cancellation(&self) -> PyCancellation {
        PyCancellation(self.0.cancellation.clone())
    }

    /// Eliminated letters in order.
    #[getter]
    fn eliminated(&self) -> Vec<String> {
        self.0.trace.eliminated().map(|l| l.to_string()).collect()
    }

    /// Easter-egg message, if the pair triggered one.
    #[getter]
    fn easter_egg(&self) -> Option<String> {
        self.0.easter_egg.as_ref().map(|egg| egg.message.clone())
    }

    /// The reading as a JSON string.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0)
            .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Reading(result={:?}, label={:?}, remaining={})",
            self.0.result.to_string(),
            self.0.meaning.label,
            self.0.remaining()
        )
    }
}

/// Python wrapper for FlamesGame.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: FlamesGame,
}

#[pymethods]
impl PyGame {
    /// Create a new game session.
    ///
    /// # Arguments
    /// - seed: Seed for story selection
    /// - easter_eggs: Detect special name pairs
    /// - require_names: Reject blank names
    #[new]
    #[pyo3(signature = (seed = 42, easter_eggs = true, require_names = true))]
    fn new(seed: u64, easter_eggs: bool, require_names: bool) -> Self {
        let config = FlamesConfig::new()
            .with_story_seed(seed)
            .with_easter_eggs(easter_eggs)
            .with_require_names(require_names);
        Self {
            game: FlamesGame::new(config),
        }
    }

    /// Calculate a reading. Raises ValueError for blank names.
    fn calculate(&mut self, name_a: &str, name_b: &str) -> PyResult<PyReading> {
        self.game
            .calculate(name_a, name_b)
            .map(PyReading)
            .map_err(to_py_err)
    }

    /// Rewind story selection to the seed.
    fn reset(&mut self) {
        self.game.reset();
    }
}
