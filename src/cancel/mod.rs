//! Letter cancellation between two names.
//!
//! Names are normalized to lowercase `a`-`z`, then letters are cancelled
//! pairwise with a greedy earliest-match policy. The number of letters left
//! over drives the FLAMES elimination.

mod canceller;

pub use canceller::{cancel_letters, Cancellation, LetterOccurrence};
