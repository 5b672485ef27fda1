//! First-class solution mutations.

use crate::models::Solution;
use std::fmt;

/// A single mutation of the chosen-set vector, bound to the solution state
/// it was generated against.
///
/// Applying a move mutates one or two entries of the chosen sets and
/// refreshes the cached score. A move is an intention captured at
/// exploration time: re-applying the same move after the solution has been
/// mutated further is undefined (the preconditions it was generated under
/// no longer hold, and [`Solution::add_set`] / [`Solution::remove_set`]
/// panic on contract violations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Drop a chosen set whose removal keeps the solution feasible.
    Remove {
        /// The set to drop.
        set: usize,
    },
    /// Replace a chosen set by an unselected one covering at least as much.
    Swap {
        /// The chosen set leaving the solution.
        out: usize,
        /// The unselected set entering the solution.
        into: usize,
    },
    /// Add an unselected set covering at least one uncovered point.
    Add {
        /// The set to add.
        set: usize,
    },
}

impl Move {
    /// Applies the move to the solution and returns the score delta.
    pub fn apply(&self, solution: &mut Solution<'_>) -> i32 {
        match *self {
            Move::Remove { set } => {
                solution.remove_set(set);
            }
            Move::Swap { out, into } => {
                solution.remove_set(out);
                solution.add_set(into);
            }
            Move::Add { set } => {
                solution.add_set(set);
            }
        }
        solution.notify_update();
        self.score_delta()
    }

    /// The objective change this move causes, without applying it.
    pub fn score_delta(&self) -> i32 {
        match self {
            Move::Remove { .. } => -1,
            Move::Swap { .. } => 0,
            Move::Add { .. } => 1,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Remove { set } => write!(f, "Remove({set})"),
            Move::Swap { out, into } => write!(f, "Swap({out} -> {into})"),
            Move::Add { set } => write!(f, "Add({set})"),
        }
    }
}
