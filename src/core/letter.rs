//! The six FLAMES letters.
//!
//! ## FlamesLetter
//!
//! One symbol of the F-L-A-M-E-S sequence. The declaration order is the
//! order in which the sequence is laid out before elimination starts.

use serde::{Deserialize, Serialize};

use crate::error::FlamesError;

/// A letter of the FLAMES sequence.
///
/// Serializes as its single-character symbol (`"F"`, `"L"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlamesLetter {
    /// Friends.
    F,
    /// Lovers.
    L,
    /// Admire.
    A,
    /// Marriage.
    M,
    /// Enemy.
    E,
    /// Soulmates.
    S,
}

impl FlamesLetter {
    /// The starting sequence, in order.
    pub const ALL: [FlamesLetter; 6] = [
        FlamesLetter::F,
        FlamesLetter::L,
        FlamesLetter::A,
        FlamesLetter::M,
        FlamesLetter::E,
        FlamesLetter::S,
    ];

    /// Position of this letter in the starting sequence (0-based).
    ///
    /// ```
    /// use flames::core::FlamesLetter;
    ///
    /// assert_eq!(FlamesLetter::F.index(), 0);
    /// assert_eq!(FlamesLetter::S.index(), 5);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The uppercase symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            FlamesLetter::F => 'F',
            FlamesLetter::L => 'L',
            FlamesLetter::A => 'A',
            FlamesLetter::M => 'M',
            FlamesLetter::E => 'E',
            FlamesLetter::S => 'S',
        }
    }

    /// Category label shown to players.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FlamesLetter::F => "Friends",
            FlamesLetter::L => "Lovers",
            FlamesLetter::A => "Admire",
            FlamesLetter::M => "Marriage",
            FlamesLetter::E => "Enemy",
            FlamesLetter::S => "Soulmates",
        }
    }

    /// Parse a symbol, case-insensitively.
    pub fn from_char(c: char) -> Result<Self, FlamesError> {
        match c.to_ascii_uppercase() {
            'F' => Ok(FlamesLetter::F),
            'L' => Ok(FlamesLetter::L),
            'A' => Ok(FlamesLetter::A),
            'M' => Ok(FlamesLetter::M),
            'E' => Ok(FlamesLetter::E),
            'S' => Ok(FlamesLetter::S),
            _ => Err(FlamesError::InvalidLetter(c)),
        }
    }
}

impl std::fmt::Display for FlamesLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for FlamesLetter {
    type Err = FlamesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(FlamesError::InvalidSymbol(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, letter) in FlamesLetter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn test_symbols_spell_flames() {
        let word: String = FlamesLetter::ALL.iter().map(|l| l.symbol()).collect();
        assert_eq!(word, "FLAMES");
    }

    #[test]
    fn test_from_char() {
        assert_eq!(FlamesLetter::from_char('m').unwrap(), FlamesLetter::M);
        assert_eq!(FlamesLetter::from_char('S').unwrap(), FlamesLetter::S);
        assert!(matches!(
            FlamesLetter::from_char('x'),
            Err(FlamesError::InvalidLetter('x'))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" e ".parse::<FlamesLetter>().unwrap(), FlamesLetter::E);
        assert_eq!(
            "x".parse::<FlamesLetter>(),
            Err(FlamesError::InvalidLetter('x'))
        );
        assert_eq!(
            "FL".parse::<FlamesLetter>(),
            Err(FlamesError::InvalidSymbol("FL".to_string()))
        );
    }

    #[test]
    fn test_from_str_empty_input() {
        let err = "  ".parse::<FlamesLetter>().unwrap_err();
        assert_eq!(err, FlamesError::InvalidSymbol(String::new()));
        assert_eq!(err.to_string(), "invalid FLAMES symbol: \"\"");
    }

    #[test]
    fn test_serde_symbol() {
        let json = serde_json::to_string(&FlamesLetter::A).unwrap();
        assert_eq!(json, "\"A\"");
        let back: FlamesLetter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FlamesLetter::A);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FlamesLetter::F.label(), "Friends");
        assert_eq!(FlamesLetter::E.label(), "Enemy");
        assert_eq!(FlamesLetter::S.label(), "Soulmates");
    }
}
