//! "What-if" helpers: swapping names and quick name suggestions.

use serde::{Deserialize, Serialize};

use crate::error::NameSlot;

/// Suggestions for the first name slot.
pub const QUICK_NAMES_FIRST: &[&str] = &["Alex", "James", "Chris", "Max", "Sam", "Jordan"];

/// Suggestions for the second name slot.
pub const QUICK_NAMES_SECOND: &[&str] = &["Emma", "Sophia", "Luna", "Aria", "Maya", "Zara"];

/// Quick suggestions for a slot.
#[must_use]
pub fn quick_names(slot: NameSlot) -> &'static [&'static str] {
    match slot {
        NameSlot::First => QUICK_NAMES_FIRST,
        NameSlot::Second => QUICK_NAMES_SECOND,
    }
}

/// The two names being entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePair {
    pub first: String,
    pub second: String,
}

impl NamePair {
    /// Create a pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Swap the two names.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.first, &mut self.second);
    }

    /// Set one slot.
    pub fn set(&mut self, slot: NameSlot, name: impl Into<String>) {
        match slot {
            NameSlot::First => self.first = name.into(),
            NameSlot::Second => self.second = name.into(),
        }
    }

    /// Get one slot.
    #[must_use]
    pub fn get(&self, slot: NameSlot) -> &str {
        match slot {
            NameSlot::First => &self.first,
            NameSlot::Second => &self.second,
        }
    }

    /// Both names are non-blank.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.first.trim().is_empty() && !self.second.trim().is_empty()
    }

    /// Clear both names.
    pub fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap() {
        let mut pair = NamePair::new("Tom", "Kate");
        pair.swap();
        assert_eq!(pair.first, "Kate");
        assert_eq!(pair.second, "Tom");
    }

    #[test]
    fn test_set_quick_name() {
        let mut pair = NamePair::default();
        assert!(!pair.is_ready());

        pair.set(NameSlot::First, quick_names(NameSlot::First)[0]);
        pair.set(NameSlot::Second, quick_names(NameSlot::Second)[0]);

        assert_eq!(pair.get(NameSlot::First), "Alex");
        assert_eq!(pair.get(NameSlot::Second), "Emma");
        assert!(pair.is_ready());

        pair.clear();
        assert!(!pair.is_ready());
    }

    #[test]
    fn test_quick_name_lists() {
        assert_eq!(QUICK_NAMES_FIRST.len(), 6);
        assert_eq!(QUICK_NAMES_SECOND.len(), 6);
    }
}
