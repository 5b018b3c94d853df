//! Core function bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cancel::{cancel_letters as cancel, Cancellation};
use crate::core::FlamesLetter;
use crate::eliminate::{elimination_order as order, resolve_flames as resolve};
use crate::error::FlamesError;

pub(crate) fn to_py_err(err: FlamesError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Cancellation.
#[pyclass(name = "Cancellation", frozen)]
#[derive(Clone, Debug)]
pub struct PyCancellation(pub Cancellation);

#[pymethods]
impl PyCancellation {
    /// Cancelled positions in the first normalized name.
    #[getter]
    fn matched_indices_a(&self) -> Vec<usize> {
        self.0.matched_indices_a.clone()
    }

    /// Partner positions in the second normalized name.
    #[getter]
    fn matched_indices_b(&self) -> Vec<usize> {
        self.0.matched_indices_b.clone()
    }

    /// Letters left uncancelled.
    #[getter]
    fn remaining(&self) -> usize {
        self.0.remaining
    }

    #[getter]
    fn name_a(&self) -> String {
        self.0.name_a.to_string()
    }

    #[getter]
    fn name_b(&self) -> String {
        self.0.name_b.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Cancellation(matched_indices_a={:?}, matched_indices_b={:?}, remaining={})",
            self.0.matched_indices_a, self.0.matched_indices_b, self.0.remaining
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Cancel matching letters between two names.
#[pyfunction]
pub fn cancel_letters(name_a: &str, name_b: &str) -> PyCancellation {
    PyCancellation(cancel(name_a, name_b))
}

/// Resolve the surviving letter ("F", "L", "A", "M", "E" or "S").
#[pyfunction]
pub fn resolve_flames(remaining: usize) -> String {
    resolve(remaining).to_string()
}

/// Eliminated letters, in order, for a remaining count.
#[pyfunction]
pub fn elimination_order(remaining: usize) -> Vec<String> {
    order(remaining).eliminated().map(|l| l.to_string()).collect()
}

/// Category label for a result letter.
#[pyfunction]
pub fn label(letter: &str) -> PyResult<&'static str> {
    let letter: FlamesLetter = letter.parse().map_err(to_py_err)?;
    Ok(letter.label())
}
