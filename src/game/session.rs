//! Game session: validation, calculation and result assembly.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::cancel::{cancel_letters, Cancellation};
use crate::core::{FlamesConfig, FlamesLetter, StoryRng, StoryRngState};
use crate::eliminate::{elimination_order, EliminationTrace};
use crate::error::{FlamesError, FlamesResult, NameSlot};
use crate::meaning::{pick_story, EasterEgg, EasterEggRegistry, Meaning};

/// Everything a presenter needs to show one calculation.
///
/// The reading is complete when returned: cancelled letters, the full
/// elimination order and the result are all precomputed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// First name as entered.
    pub name_a: String,
    /// Second name as entered.
    pub name_b: String,
    /// Letter cancellation between the two names.
    pub cancellation: Cancellation,
    /// Elimination steps driven by `cancellation.remaining`.
    pub trace: EliminationTrace,
    /// The surviving letter.
    pub result: FlamesLetter,
    /// Label and emoji for the result.
    pub meaning: Meaning,
    /// Flavour text for the result.
    pub story: &'static str,
    /// Special message for this pair, if any.
    pub easter_egg: Option<EasterEgg>,
}

impl Reading {
    /// Letters left after cancellation.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cancellation.remaining
    }
}

/// A FLAMES game session.
///
/// Holds configuration, the easter-egg registry and the story RNG. The
/// cancel/eliminate core itself is stateless; only story selection advances
/// between calculations.
///
/// ## Example
///
/// ```
/// use flames::core::{FlamesConfig, FlamesLetter};
/// use flames::game::FlamesGame;
///
/// let mut game = FlamesGame::new(FlamesConfig::default());
/// let reading = game.calculate("Tom", "Kate").unwrap();
/// assert_eq!(reading.remaining(), 5);
/// assert_eq!(reading.result, FlamesLetter::F);
/// ```
#[derive(Clone, Debug)]
pub struct FlamesGame {
    config: FlamesConfig,
    eggs: EasterEggRegistry,
    rng: StoryRng,
}

impl FlamesGame {
    /// Create a session with the built-in easter eggs.
    #[must_use]
    pub fn new(config: FlamesConfig) -> Self {
        let rng = StoryRng::new(config.story_seed);
        Self {
            config,
            eggs: EasterEggRegistry::with_defaults(),
            rng,
        }
    }

    /// Replace the easter-egg registry.
    #[must_use]
    pub fn with_registry(mut self, eggs: EasterEggRegistry) -> Self {
        self.eggs = eggs;
        self
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &FlamesConfig {
        &self.config
    }

    /// The easter-egg registry.
    #[must_use]
    pub fn registry(&self) -> &EasterEggRegistry {
        &self.eggs
    }

    /// Current story RNG state.
    #[must_use]
    pub fn rng_state(&self) -> StoryRngState {
        self.rng.state()
    }

    /// Restore the story RNG, e.g. to replay a session.
    pub fn restore_rng(&mut self, state: &StoryRngState) {
        self.rng = StoryRng::from_state(state);
    }

    /// Rewind story selection to the configured seed.
    pub fn reset(&mut self) {
        self.rng = StoryRng::new(self.config.story_seed);
    }

    /// Run a full calculation for two raw names.
    ///
    /// Fails with [`FlamesError::EmptyName`] when a name is blank and
    /// `require_names` is set. A name with no `a`-`z` letters (say, only
    /// digits) is not blank and runs through the core.
    #[instrument(level = "debug", skip(self))]
    pub fn calculate(&mut self, name_a: &str, name_b: &str) -> FlamesResult<Reading> {
        if self.config.require_names {
            if name_a.trim().is_empty() {
                return Err(FlamesError::EmptyName(NameSlot::First));
            }
            if name_b.trim().is_empty() {
                return Err(FlamesError::EmptyName(NameSlot::Second));
            }
        }

        let easter_egg = if self.config.easter_eggs {
            self.eggs.check(name_a, name_b)
        } else {
            None
        };

        let cancellation = cancel_letters(name_a, name_b);
        debug!(
            pairs = cancellation.pair_count(),
            remaining = cancellation.remaining,
            "cancelled letters"
        );

        let trace = elimination_order(cancellation.remaining);
        let result = trace.survivor;
        debug!(%result, "resolved");

        let story = pick_story(result, &mut self.rng);

        Ok(Reading {
            name_a: name_a.to_string(),
            name_b: name_b.to_string(),
            cancellation,
            trace,
            result,
            meaning: Meaning::of(result),
            story,
            easter_egg,
        })
    }
}

impl Default for FlamesGame {
    fn default() -> Self {
        Self::new(FlamesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_names() {
        let mut game = FlamesGame::default();
        assert_eq!(
            game.calculate("  ", "Kate"),
            Err(FlamesError::EmptyName(NameSlot::First))
        );
        assert_eq!(
            game.calculate("Tom", ""),
            Err(FlamesError::EmptyName(NameSlot::Second))
        );
    }

    #[test]
    fn test_blank_names_allowed_when_not_required() {
        let mut game = FlamesGame::new(FlamesConfig::new().with_require_names(false));
        let reading = game.calculate("", "").unwrap();
        assert_eq!(reading.remaining(), 0);
        assert_eq!(reading.result, FlamesLetter::F);
    }

    #[test]
    fn test_reading_is_consistent() {
        let mut game = FlamesGame::default();
        let reading = game.calculate("Romeo", "Juliet").unwrap();

        assert_eq!(reading.remaining(), 9);
        assert_eq!(reading.trace.remaining, 9);
        assert_eq!(reading.result, reading.trace.survivor);
        assert_eq!(reading.meaning.letter, reading.result);
        assert_eq!(reading.result, FlamesLetter::E);
        assert!(reading.easter_egg.is_some());
    }

    #[test]
    fn test_easter_eggs_can_be_disabled() {
        let mut game = FlamesGame::new(FlamesConfig::new().with_easter_eggs(false));
        let reading = game.calculate("Romeo", "Juliet").unwrap();
        assert!(reading.easter_egg.is_none());
    }

    #[test]
    fn test_reset_replays_stories() {
        let mut game = FlamesGame::default();
        let first: Vec<_> = (0..5)
            .map(|_| game.calculate("Tom", "Kate").unwrap().story)
            .collect();

        game.reset();
        let second: Vec<_> = (0..5)
            .map(|_| game.calculate("Tom", "Kate").unwrap().story)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_restore_rng() {
        let mut game = FlamesGame::default();
        game.calculate("Alex", "Emma").unwrap();
        let state = game.rng_state();
        let expected = game.calculate("Alex", "Emma").unwrap().story;

        game.restore_rng(&state);
        assert_eq!(game.calculate("Alex", "Emma").unwrap().story, expected);
    }
}
