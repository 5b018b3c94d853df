//! Game configuration.
//!
//! Callers configure a `FlamesGame` at startup with a `FlamesConfig`:
//! - `story_seed`: seed for deterministic story selection
//! - `easter_eggs`: whether special name pairs are detected
//! - `require_names`: whether blank names are rejected before calculating
//!
//! None of these settings affect the cancel/eliminate core. The core is a
//! pure function of the two names.

use serde::{Deserialize, Serialize};

use crate::error::FlamesError;

/// Default story seed.
pub const DEFAULT_STORY_SEED: u64 = 42;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlamesConfig {
    /// Seed for the story RNG.
    pub story_seed: u64,

    /// Detect famous pairs and other special inputs.
    pub easter_eggs: bool,

    /// Reject names that are blank after trimming.
    ///
    /// When disabled, blank names run through the core and produce the
    /// degenerate `remaining = 0` reading.
    pub require_names: bool,
}

impl Default for FlamesConfig {
    fn default() -> Self {
        Self {
            story_seed: DEFAULT_STORY_SEED,
            easter_eggs: true,
            require_names: true,
        }
    }
}

impl FlamesConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the story seed.
    #[must_use]
    pub fn with_story_seed(mut self, seed: u64) -> Self {
        self.story_seed = seed;
        self
    }

    /// Enable or disable easter-egg detection.
    #[must_use]
    pub fn with_easter_eggs(mut self, enabled: bool) -> Self {
        self.easter_eggs = enabled;
        self
    }

    /// Enable or disable blank-name rejection.
    #[must_use]
    pub fn with_require_names(mut self, required: bool) -> Self {
        self.require_names = required;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, FlamesError> {
        serde_json::from_str(json).map_err(|e| FlamesError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlamesConfig::new();
        assert_eq!(config.story_seed, DEFAULT_STORY_SEED);
        assert!(config.easter_eggs);
        assert!(config.require_names);
    }

    #[test]
    fn test_builder() {
        let config = FlamesConfig::new()
            .with_story_seed(7)
            .with_easter_eggs(false)
            .with_require_names(false);

        assert_eq!(config.story_seed, 7);
        assert!(!config.easter_eggs);
        assert!(!config.require_names);
    }

    #[test]
    fn test_from_json_partial() {
        let config = FlamesConfig::from_json(r#"{"story_seed": 9}"#).unwrap();
        assert_eq!(config.story_seed, 9);
        assert!(config.easter_eggs);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = FlamesConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, FlamesError::Config(_)));
    }
}
