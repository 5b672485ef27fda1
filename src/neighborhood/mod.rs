//! Move neighborhoods over a live solution.
//!
//! A neighborhood enumerates candidate [`Move`]s against the current
//! solution, in a fixed order, as a lazily-produced sequence. The search
//! loop consumes it first-improvement style: only the first element is ever
//! taken, so enumeration short-circuits as soon as one feasible move is
//! found.
//!
//! Each exploration recomputes the covered-point union of the chosen sets
//! from scratch (`O(|chosen| * n_points / wordsize)`); no coverage state is
//! carried between explorations.
//!
//! Three neighborhoods are provided:
//!
//! - [`RemoveNeighborhood`] — drop one set, keeping coverage feasible
//!   (score delta −1)
//! - [`SwapNeighborhood`] — replace one chosen set by an unselected one
//!   that covers everything only the outgoing set covered (delta 0)
//! - [`AddNeighborhood`] — add one set covering at least one uncovered
//!   point (delta +1; a deliberate worsening that opens later removals)

mod add;
mod moves;
mod remove;
mod swap;

pub use add::AddNeighborhood;
pub use moves::Move;
pub use remove::RemoveNeighborhood;
pub use swap::SwapNeighborhood;

use crate::models::Solution;

/// A move neighborhood: lazily enumerates feasibility-preserving moves.
pub trait Neighborhood {
    /// Enumerates the moves available against `solution`, in a fixed order.
    ///
    /// The sequence is finite, non-restartable and borrows the solution;
    /// apply a yielded move only after dropping the iterator.
    fn explore<'s>(&'s self, solution: &'s Solution<'_>) -> Box<dyn Iterator<Item = Move> + 's>;

    /// The first available move, if any (first-improvement selection).
    fn first(&self, solution: &Solution<'_>) -> Option<Move> {
        self.explore(solution).next()
    }
}
