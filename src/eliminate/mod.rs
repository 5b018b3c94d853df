//! FLAMES elimination.
//!
//! The remaining-letter count from the canceller drives a Josephus-style
//! count around the F-L-A-M-E-S ring. Every run takes exactly five steps
//! and leaves one letter.

mod eliminator;

pub use eliminator::{
    elimination_order, next_slot, resolve_flames, EliminationStep, EliminationTrace, Eliminator,
    LetterState, ELIMINATION_STEPS,
};
