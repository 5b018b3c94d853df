//! Game session layer.
//!
//! Wraps the pure core with the caller-side policy: blank-name rejection,
//! easter eggs, story selection and name-entry helpers.

mod session;
mod what_if;

pub use session::{FlamesGame, Reading};
pub use what_if::{quick_names, NamePair, QUICK_NAMES_FIRST, QUICK_NAMES_SECOND};
