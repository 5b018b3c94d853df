//! Error types.
//!
//! The cancel/eliminate core is total and never fails. Errors only come
//! from the session layer (input validation), letter parsing and
//! configuration loading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two names an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameSlot {
    /// The first name.
    First,
    /// The second name.
    Second,
}

impl std::fmt::Display for NameSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameSlot::First => f.write_str("first"),
            NameSlot::Second => f.write_str("second"),
        }
    }
}

/// Errors raised outside the pure core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlamesError {
    /// A name was blank after trimming.
    #[error("{0} name is empty")]
    EmptyName(NameSlot),

    /// A character is not one of F, L, A, M, E, S.
    #[error("invalid FLAMES letter: {0:?}")]
    InvalidLetter(char),

    /// A string is not exactly one FLAMES letter.
    #[error("invalid FLAMES symbol: {0:?}")]
    InvalidSymbol(String),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Result alias for session-level operations.
pub type FlamesResult<T> = Result<T, FlamesError>;
