//! # flames
//!
//! The FLAMES relationship game: two names in, one of Friends, Lovers,
//! Admire, Marriage, Enemy or Soulmates out.
//!
//! ## How a reading is computed
//!
//! 1. **Cancel**: both names are reduced to lowercase `a`-`z`. Each letter
//!    of the first name cancels the earliest unused equal letter of the
//!    second. The uncancelled letters are counted.
//!
//! 2. **Eliminate**: starting from F-L-A-M-E-S, count `remaining` places
//!    around the ring and remove the letter landed on. Repeat with the same
//!    count until one letter is left.
//!
//! Both steps are pure functions. Everything else in this crate (meanings,
//! stories, easter eggs, the session type, bindings) sits on top.
//!
//! ## Modules
//!
//! - `core`: Letters, name normalization, configuration, story RNG
//! - `cancel`: Letter cancellation
//! - `eliminate`: FLAMES elimination state machine
//! - `meaning`: Labels, stories and easter eggs
//! - `game`: Session orchestration and what-if helpers
//!
//! ```
//! use flames::{cancel_letters, resolve_flames, FlamesLetter};
//!
//! let c = cancel_letters("Tom", "Kate");
//! assert_eq!(c.remaining, 5);
//! assert_eq!(resolve_flames(c.remaining), FlamesLetter::F);
//! ```

pub mod core;
pub mod error;
pub mod cancel;
pub mod eliminate;
pub mod meaning;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{FlamesConfig, FlamesLetter, NormalizedName, StoryRng, StoryRngState};

pub use crate::error::{FlamesError, FlamesResult, NameSlot};

pub use crate::cancel::{cancel_letters, Cancellation, LetterOccurrence};

pub use crate::eliminate::{
    elimination_order, resolve_flames, EliminationStep, EliminationTrace, Eliminator, LetterState,
};

pub use crate::meaning::{EasterEgg, EasterEggRegistry, Meaning, SpecialAnimation};

pub use crate::game::{FlamesGame, NamePair, Reading};
