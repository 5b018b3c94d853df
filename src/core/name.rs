//! Name normalization.
//!
//! A raw name is reduced to the lowercase subsequence of its `a`-`z`
//! letters. Everything else (spaces, digits, punctuation, accented or
//! non-Latin letters) is dropped.

use serde::{Deserialize, Serialize};

/// A name reduced to lowercase ASCII letters.
///
/// ## Example
///
/// ```
/// use flames::core::NormalizedName;
///
/// let name = NormalizedName::new("Mary-Jane 2");
/// assert_eq!(name.as_str(), "maryjane");
/// assert_eq!(name.len(), 8);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Normalize raw input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(
            raw.chars()
                .flat_map(char::to_lowercase)
                .filter(char::is_ascii_lowercase)
                .collect(),
        )
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The normalized letters as bytes (always ASCII).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no letters survived normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
