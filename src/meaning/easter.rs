//! Easter eggs for special name pairs.
//!
//! The `EasterEggRegistry` stores the famous pairs and answers lookups in
//! either name order. `check` also applies the pattern rules that are not
//! tied to a registered pair.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Animation tag carried with an egg. Presentation decides what it means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialAnimation {
    Rainbow,
    Explosion,
    Hearts,
    Magic,
}

/// A special message attached to a name pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterEgg {
    /// The pair this egg was matched for.
    pub names: (String, String),
    /// Message shown with the result.
    pub message: String,
    /// Emoji shown with the message.
    pub emoji: String,
    /// Optional animation tag.
    pub special_animation: Option<SpecialAnimation>,
}

impl EasterEgg {
    /// Create an egg.
    pub fn new(
        names: (impl Into<String>, impl Into<String>),
        message: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            names: (names.0.into(), names.1.into()),
            message: message.into(),
            emoji: emoji.into(),
            special_animation: None,
        }
    }

    /// Set the animation tag.
    #[must_use]
    pub fn with_animation(mut self, animation: SpecialAnimation) -> Self {
        self.special_animation = Some(animation);
        self
    }
}

/// Combined trimmed length that triggers the lucky-13 egg.
pub const LUCKY_LENGTH: usize = 13;

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Registry of easter eggs keyed by name pair.
///
/// ## Example
///
/// ```
/// use flames::meaning::EasterEggRegistry;
///
/// let registry = EasterEggRegistry::with_defaults();
/// let egg = registry.check("Juliet", "Romeo").unwrap();
/// assert_eq!(egg.names, ("romeo".to_string(), "juliet".to_string()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EasterEggRegistry {
    eggs: FxHashMap<(String, String), EasterEgg>,
}

impl EasterEggRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in famous pairs.
    #[must_use]
    pub fn with_defaults() -> Self {
        use SpecialAnimation::*;

        let mut registry = Self::new();
        let defaults = [
            EasterEgg::new(
                ("romeo", "juliet"),
                "A love story for the ages! 🎭 Star-crossed lovers reunited!",
                "💔❤️",
            )
            .with_animation(Hearts),
            EasterEgg::new(
                ("jack", "rose"),
                "I'll never let go! 🚢 A love that survived the icy depths!",
                "💎",
            )
            .with_animation(Magic),
            EasterEgg::new(
                ("adam", "eve"),
                "The original love story! 🍎 Eden approves this match!",
                "🌿",
            )
            .with_animation(Magic),
            EasterEgg::new(
                ("bonnie", "clyde"),
                "Partners in crime! 💰 An adventurous duo!",
                "🔫💕",
            )
            .with_animation(Explosion),
            EasterEgg::new(
                ("mickey", "minnie"),
                "Disney magic at its finest! 🏰 A timeless love!",
                "🐭❤️",
            )
            .with_animation(Magic),
            EasterEgg::new(
                ("pizza", "pizza"),
                "Pizza loves pizza! A match made in food heaven! 🍕",
                "🍕💕",
            )
            .with_animation(Hearts),
            EasterEgg::new(
                ("love", "love"),
                "Love loves love! How meta and beautiful! 💗",
                "💕",
            )
            .with_animation(Hearts),
        ];
        for egg in defaults {
            registry.register(egg);
        }
        registry
    }

    /// Register an egg. Names are lowercased; a later egg for the same pair
    /// replaces the earlier one.
    pub fn register(&mut self, mut egg: EasterEgg) {
        egg.names = (egg.names.0.to_lowercase(), egg.names.1.to_lowercase());
        let key = pair_key(&egg.names.0, &egg.names.1);
        self.eggs.insert(key, egg);
    }

    /// Look up a registered pair, in either order.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<&EasterEgg> {
        self.eggs.get(&pair_key(&a.to_lowercase(), &b.to_lowercase()))
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.eggs.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eggs.is_empty()
    }

    /// Find the egg for two raw names.
    ///
    /// Names are lowercased and trimmed. Rules, first match wins:
    /// 1. identical names
    /// 2. a registered pair
    /// 3. either name contains "love"
    /// 4. combined length of exactly [`LUCKY_LENGTH`]
    #[must_use]
    pub fn check(&self, name_a: &str, name_b: &str) -> Option<EasterEgg> {
        let a = name_a.to_lowercase();
        let b = name_b.to_lowercase();
        let (a, b) = (a.trim(), b.trim());

        if a == b {
            return Some(
                EasterEgg::new(
                    ("same", "same"),
                    format!("{name_a} loves {name_b}! Self-love is the best love! 💪✨"),
                    "🪞💕",
                )
                .with_animation(SpecialAnimation::Rainbow),
            );
        }

        if let Some(egg) = self.get(a, b) {
            return Some(egg.clone());
        }

        if a.contains("love") || b.contains("love") {
            return Some(
                EasterEgg::new(
                    (a, b),
                    "Love is literally in the name! 💕 The universe approves!",
                    "💝",
                )
                .with_animation(SpecialAnimation::Hearts),
            );
        }

        if a.chars().count() + b.chars().count() == LUCKY_LENGTH {
            return Some(
                EasterEgg::new(
                    (a, b),
                    "Lucky number 13! 🍀 Some say it's unlucky, but for love, it's magical!",
                    "🌟",
                )
                .with_animation(SpecialAnimation::Magic),
            );
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_registered() {
        let registry = EasterEggRegistry::with_defaults();
        assert_eq!(registry.len(), 7);
        assert!(registry.get("jack", "rose").is_some());
        assert!(registry.get("ROSE", "Jack").is_some());
        assert!(registry.get("jack", "jill").is_none());
    }

    #[test]
    fn test_same_name_wins_over_registered_pair() {
        let registry = EasterEggRegistry::with_defaults();
        let egg = registry.check("Pizza", " pizza ").unwrap();
        assert_eq!(egg.names.0, "same");
        assert_eq!(egg.special_animation, Some(SpecialAnimation::Rainbow));
        assert!(egg.message.starts_with("Pizza loves  pizza !"));
    }

    #[test]
    fn test_registered_pair_either_order() {
        let registry = EasterEggRegistry::with_defaults();
        let egg = registry.check("Clyde", "Bonnie").unwrap();
        assert_eq!(egg.special_animation, Some(SpecialAnimation::Explosion));
        assert_eq!(egg.emoji, "🔫💕");
    }

    #[test]
    fn test_love_pattern() {
        let registry = EasterEggRegistry::with_defaults();
        let egg = registry.check("Lovelace", "Ada").unwrap();
        assert_eq!(egg.names, ("lovelace".to_string(), "ada".to_string()));
        assert_eq!(egg.special_animation, Some(SpecialAnimation::Hearts));
    }

    #[test]
    fn test_lucky_thirteen() {
        let registry = EasterEggRegistry::with_defaults();
        // 6 + 7 letters
        let egg = registry.check("Robert", "Jessica").unwrap();
        assert_eq!(egg.emoji, "🌟");
        assert_eq!(egg.special_animation, Some(SpecialAnimation::Magic));
    }

    #[test]
    fn test_no_egg() {
        let registry = EasterEggRegistry::with_defaults();
        assert!(registry.check("Tom", "Kate").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = EasterEggRegistry::new();
        registry.register(EasterEgg::new(("A", "B"), "first", "1"));
        registry.register(EasterEgg::new(("b", "a"), "second", "2"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a", "b").unwrap().message, "second");
    }
}
