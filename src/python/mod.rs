//! Python bindings for the FLAMES game.
//!
//! # Quick Start
//!
//! ```python
//! import flames
//!
//! c = flames.cancel_letters("Tom", "Kate")
//! assert c.remaining == 5
//! assert flames.resolve_flames(c.remaining) == "F"
//!
//! game = flames.Game(seed=7)
//! reading = game.calculate("Tom", "Kate")
//! print(reading.label, reading.story)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// flames: letter cancellation and FLAMES elimination.
#[pymodule]
fn flames(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core functions
    m.add_function(wrap_pyfunction!(cancel_letters, m)?)?;
    m.add_function(wrap_pyfunction!(resolve_flames, m)?)?;
    m.add_function(wrap_pyfunction!(elimination_order, m)?)?;
    m.add_function(wrap_pyfunction!(label, m)?)?;
    m.add_class::<PyCancellation>()?;

    // Sessions
    m.add_class::<PyGame>()?;
    m.add_class::<PyReading>()?;

    Ok(())
}
