//! Circular elimination over the FLAMES sequence.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::FlamesLetter;

/// Number of elimination steps in every run (6 letters down to 1).
pub const ELIMINATION_STEPS: usize = FlamesLetter::ALL.len() - 1;

/// Index of the letter to eliminate: `(position + remaining - 1) mod len`.
///
/// Uses Euclidean remainder so `remaining == 0` counts one slot backwards
/// instead of producing a negative index. `len` must be non-zero.
#[must_use]
pub fn next_slot(position: usize, remaining: usize, len: usize) -> usize {
    debug_assert!(len > 0, "next_slot on empty sequence");
    let step = (remaining % len) as i64;
    let offset = position as i64 + step - 1;
    offset.rem_euclid(len as i64) as usize
}

/// One elimination: which letter left the sequence and where from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationStep {
    /// The eliminated letter.
    pub letter: FlamesLetter,
    /// Slot it occupied in the shrinking sequence.
    pub slot: usize,
    /// Sequence length before the removal.
    pub len_before: usize,
    /// Cursor the next step starts counting from.
    pub next_position: usize,
}

/// Elimination state machine.
///
/// Starts from the full F-L-A-M-E-S sequence with the cursor at 0. Each
/// step removes the letter at [`next_slot`]. When the removed slot is at or
/// past the new end the cursor wraps to 0, otherwise it stays on the slot,
/// which now holds the letter that followed the removed one. `remaining`
/// never changes during a run.
///
/// Iterating an `Eliminator` yields exactly [`ELIMINATION_STEPS`] steps.
///
/// ```
/// use flames::core::FlamesLetter;
/// use flames::eliminate::Eliminator;
///
/// let mut run = Eliminator::new(5);
/// let first = run.next().unwrap();
/// assert_eq!(first.letter, FlamesLetter::E);
/// assert_eq!(run.sequence().len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eliminator {
    sequence: SmallVec<[FlamesLetter; 6]>,
    position: usize,
    remaining: usize,
}

impl Eliminator {
    /// Start a run for the given remaining count.
    #[must_use]
    pub fn new(remaining: usize) -> Self {
        Self {
            sequence: SmallVec::from_buf(FlamesLetter::ALL),
            position: 0,
            remaining,
        }
    }

    /// The count driving every step of this run.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Letters still in play, in sequence order.
    #[must_use]
    pub fn sequence(&self) -> &[FlamesLetter] {
        &self.sequence
    }

    /// Current cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once a single letter is left.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.sequence.len() == 1
    }

    /// The surviving letter, once the run is finished.
    #[must_use]
    pub fn survivor(&self) -> Option<FlamesLetter> {
        if self.is_finished() {
            self.sequence.first().copied()
        } else {
            None
        }
    }

    /// Perform one elimination. Returns `None` when already finished.
    pub fn step(&mut self) -> Option<EliminationStep> {
        let len_before = self.sequence.len();
        if len_before <= 1 {
            return None;
        }

        let slot = next_slot(self.position, self.remaining, len_before);
        let letter = self.sequence.remove(slot);
        self.position = if slot >= self.sequence.len() { 0 } else { slot };

        trace!(
            %letter,
            slot,
            len_before,
            next_position = self.position,
            "eliminated"
        );

        Some(EliminationStep {
            letter,
            slot,
            len_before,
            next_position: self.position,
        })
    }

    /// Run to completion and return the survivor.
    #[must_use]
    pub fn finish(mut self) -> FlamesLetter {
        while self.step().is_some() {}
        self.sequence[0]
    }
}

impl Iterator for Eliminator {
    type Item = EliminationStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.sequence.len() - 1;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Eliminator {}

/// Resolve the surviving FLAMES letter for a remaining count.
///
/// Pure: the same `remaining` always yields the same letter.
///
/// ```
/// use flames::core::FlamesLetter;
/// use flames::eliminate::resolve_flames;
///
/// assert_eq!(resolve_flames(5), FlamesLetter::F);
/// assert_eq!(resolve_flames(1), FlamesLetter::S);
/// ```
#[must_use]
pub fn resolve_flames(remaining: usize) -> FlamesLetter {
    Eliminator::new(remaining).finish()
}

/// Display state of a letter during a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterState {
    /// Still in play.
    Active,
    /// Removed by an elimination step.
    Eliminated,
    /// The survivor.
    Winner,
}

/// A complete, precomputed elimination run.
///
/// Holds every step so a presenter can replay the eliminations one at a
/// time without re-entering the core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationTrace {
    /// The count that drove the run.
    pub remaining: usize,
    /// Steps in elimination order.
    pub steps: Vec<EliminationStep>,
    /// The surviving letter.
    pub survivor: FlamesLetter,
}

impl EliminationTrace {
    /// Eliminated letters in order.
    pub fn eliminated(&self) -> impl Iterator<Item = FlamesLetter> + '_ {
        self.steps.iter().map(|s| s.letter)
    }

    /// State of each letter (indexed like [`FlamesLetter::ALL`]) after the
    /// first `revealed` steps. Once every step is revealed the survivor is
    /// marked as the winner.
    #[must_use]
    pub fn states_after(&self, revealed: usize) -> [LetterState; 6] {
        let mut states = [LetterState::Active; 6];
        for step in self.steps.iter().take(revealed) {
            states[step.letter.index()] = LetterState::Eliminated;
        }
        if revealed >= self.steps.len() {
            states[self.survivor.index()] = LetterState::Winner;
        }
        states
    }
}

/// Run the elimination for `remaining` and record every step.
#[must_use]
pub fn elimination_order(remaining: usize) -> EliminationTrace {
    let mut run = Eliminator::new(remaining);
    let steps: Vec<_> = run.by_ref().collect();
    let survivor = run.sequence()[0];

    EliminationTrace {
        remaining,
        steps,
        survivor,
    }
}
