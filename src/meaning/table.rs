//! Labels, emoji and stories keyed by result letter.

use serde::Serialize;

use crate::core::{FlamesLetter, StoryRng};

/// What a result letter means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Meaning {
    /// The result letter.
    pub letter: FlamesLetter,
    /// Category label ("Friends", "Lovers", ...).
    pub label: &'static str,
    /// Emoji shown with the label.
    pub emoji: &'static str,
}

impl Meaning {
    /// Look up the meaning of a letter.
    ///
    /// ```
    /// use flames::core::FlamesLetter;
    /// use flames::meaning::Meaning;
    ///
    /// let m = Meaning::of(FlamesLetter::M);
    /// assert_eq!(m.label, "Marriage");
    /// ```
    #[must_use]
    pub const fn of(letter: FlamesLetter) -> Self {
        let emoji = match letter {
            FlamesLetter::F => "🤝",
            FlamesLetter::L => "💕",
            FlamesLetter::A => "✨",
            FlamesLetter::M => "💍",
            FlamesLetter::E => "⚔️",
            FlamesLetter::S => "💝",
        };
        Self {
            letter,
            label: letter.label(),
            emoji,
        }
    }
}

impl std::fmt::Display for Meaning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label, self.emoji)
    }
}

const FRIENDS: &[&str] = &[
    "Your bond runs deep like an eternal friendship! You two are destined to share inside jokes, midnight snacks, and adventures that only best friends understand. 🎉",
    "Friendship is the foundation of all great relationships! You've found someone who gets you at your core. Treasure this connection! 🌟",
    "Some souls connect as friends across lifetimes. You two share that rare, beautiful friendship that makes life sweeter! 🍀",
];

const LOVERS: &[&str] = &[
    "The stars have aligned for a romantic journey! Your hearts beat in sync, creating a love story written in the constellations. Get ready for butterflies! 💫",
    "Love is in the air! You two are meant for moonlit walks, stolen glances, and the kind of romance that makes hearts flutter. 🌹",
    "When love finds its match, magic happens! You've discovered a soulmate-level connection that will only grow stronger. 💝",
];

const ADMIRE: &[&str] = &[
    "Someone has a secret admirer vibe! There's an undeniable attraction brewing, filled with stolen glances and racing hearts. 😍",
    "The spark of admiration is the beginning of something beautiful! This connection has the potential to bloom into something magical. ✨",
    "Admiration is where great love stories begin! You're at the exciting chapter where every interaction feels electric. 💖",
];

const MARRIAGE: &[&str] = &[
    "Wedding bells are ringing in your future! You two are soulmates destined to build a beautiful life together. Start planning! 💒",
    "The universe has spoken — marriage is written in your stars! You've found your forever person. 👰💍",
    "True partnership material! Your connection has the depth and strength that builds lasting marriages. Congratulations, you've found 'the one'! 🎊",
];

const ENEMY: &[&str] = &[
    "Opposites attract, but sometimes they clash! Your dynamic is fiery and intense — perfect for a rivals-to-lovers arc! 🔥",
    "Every great story needs tension! Your 'enemy' status might just be unresolved chemistry waiting to explode. 💥",
    "Plot twist: Many epic love stories started as rivalries! This tension could lead somewhere unexpected... 😏",
];

const SOULMATES: &[&str] = &[
    "SOULMATES! Your souls have been searching for each other across galaxies. This is the rarest and most precious connection! 🌌",
    "Written in the stars, sealed by the universe — you are true soulmates! Your love transcends time and space. ✨💕",
    "The universe conspired to bring you together! Soulmates like you share a bond that nothing can break. 💞🌟",
];

/// All stories for a result letter.
#[must_use]
pub fn stories(letter: FlamesLetter) -> &'static [&'static str] {
    match letter {
        FlamesLetter::F => FRIENDS,
        FlamesLetter::L => LOVERS,
        FlamesLetter::A => ADMIRE,
        FlamesLetter::M => MARRIAGE,
        FlamesLetter::E => ENEMY,
        FlamesLetter::S => SOULMATES,
    }
}

/// Pick one story for a letter.
#[must_use]
pub fn pick_story(letter: FlamesLetter, rng: &mut StoryRng) -> &'static str {
    let all = stories(letter);
    rng.choose(all).copied().unwrap_or(all[0])
}
