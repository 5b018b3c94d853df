//! Greedy one-to-one letter cancellation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::NormalizedName;

/// Outcome of cancelling two names against each other.
///
/// `matched_indices_a[k]` and `matched_indices_b[k]` are the two halves of
/// the k-th cancelled pair. Indices refer to positions in the normalized
/// names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cancellation {
    /// First name after normalization.
    pub name_a: NormalizedName,
    /// Second name after normalization.
    pub name_b: NormalizedName,
    /// Cancelled positions in the first name, ascending.
    pub matched_indices_a: Vec<usize>,
    /// Partner positions in the second name, in pairing order.
    pub matched_indices_b: Vec<usize>,
    /// Letters left uncancelled across both names.
    pub remaining: usize,
}

/// A single letter of a normalized name and whether it was cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterOccurrence {
    /// Position in the normalized name.
    pub index: usize,
    /// The lowercase letter.
    pub letter: char,
    /// Whether it found a partner in the other name.
    pub cancelled: bool,
}

impl Cancellation {
    /// Number of cancelled pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.matched_indices_a.len()
    }

    /// Iterate over cancelled `(index_a, index_b)` pairs in matching order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matched_indices_a
            .iter()
            .copied()
            .zip(self.matched_indices_b.iter().copied())
    }

    /// Letters of the first name with their cancelled state.
    #[must_use]
    pub fn occurrences_a(&self) -> Vec<LetterOccurrence> {
        occurrences(&self.name_a, &self.matched_indices_a)
    }

    /// Letters of the second name with their cancelled state.
    #[must_use]
    pub fn occurrences_b(&self) -> Vec<LetterOccurrence> {
        occurrences(&self.name_b, &self.matched_indices_b)
    }

    /// Uncancelled letters of both names, first name then second.
    #[must_use]
    pub fn leftover_letters(&self) -> String {
        self.occurrences_a()
            .into_iter()
            .chain(self.occurrences_b())
            .filter(|o| !o.cancelled)
            .map(|o| o.letter)
            .collect()
    }
}

fn occurrences(name: &NormalizedName, matched: &[usize]) -> Vec<LetterOccurrence> {
    name.as_str()
        .chars()
        .enumerate()
        .map(|(index, letter)| LetterOccurrence {
            index,
            letter,
            cancelled: matched.contains(&index),
        })
        .collect()
}

/// Cancel matching letters between two raw names.
///
/// Both names are normalized first. Each letter of the first name, left to
/// right, cancels against the earliest not-yet-used equal letter of the
/// second name. This is a greedy matching, not a maximum one, and the pair
/// order it produces is part of the result.
///
/// ## Example
///
/// ```
/// use flames::cancel::cancel_letters;
///
/// let c = cancel_letters("aab", "ab");
/// assert_eq!(c.matched_indices_a, vec![0, 2]);
/// assert_eq!(c.matched_indices_b, vec![0, 1]);
/// assert_eq!(c.remaining, 1);
/// ```
#[must_use]
pub fn cancel_letters(name_a: &str, name_b: &str) -> Cancellation {
    let name_a = NormalizedName::new(name_a);
    let name_b = NormalizedName::new(name_b);

    let letters_b = name_b.as_bytes();
    let mut used_b: SmallVec<[bool; 32]> = SmallVec::from_elem(false, letters_b.len());

    let mut matched_indices_a = Vec::new();
    let mut matched_indices_b = Vec::new();

    for (i, &letter) in name_a.as_bytes().iter().enumerate() {
        let partner = letters_b
            .iter()
            .enumerate()
            .position(|(j, &other)| other == letter && !used_b[j]);

        if let Some(j) = partner {
            used_b[j] = true;
            matched_indices_a.push(i);
            matched_indices_b.push(j);
        }
    }

    let remaining = name_a.len() + name_b.len() - 2 * matched_indices_a.len();

    Cancellation {
        name_a,
        name_b,
        matched_indices_a,
        matched_indices_b,
        remaining,
    }
}
