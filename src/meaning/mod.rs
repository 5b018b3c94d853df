//! Lookup tables for presenting a result.
//!
//! - `Meaning`: label and emoji per letter
//! - `stories` / `pick_story`: short flavour texts per letter
//! - `EasterEggRegistry`: special messages for particular name pairs

mod easter;
mod table;

pub use easter::{EasterEgg, EasterEggRegistry, SpecialAnimation, LUCKY_LENGTH};
pub use table::{pick_story, stories, Meaning};
