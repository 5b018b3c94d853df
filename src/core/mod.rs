//! Core types: letters, names, configuration, RNG.
//!
//! These are the building blocks shared by the canceller, the eliminator
//! and the game session.

pub mod letter;
pub mod name;
pub mod config;
pub mod rng;

pub use letter::FlamesLetter;
pub use name::NormalizedName;
pub use config::{FlamesConfig, DEFAULT_STORY_SEED};
pub use rng::{StoryRng, StoryRngState};
