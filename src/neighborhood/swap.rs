//! Swap neighborhood: replace one chosen set by an unselected one.

use super::{Move, Neighborhood};
use crate::models::{BitSet, Solution};

/// Generates a [`Move::Swap`] for every pair of a chosen set `out` and an
/// unselected set `into` such that `into` covers every point only `out`
/// covers among the chosen sets.
///
/// Feasibility is preserved by construction: the net covered set cannot
/// shrink below the pre-swap baseline, so no coverage re-check is needed.
/// A chosen set with no uniquely covered points is skipped — dropping it
/// outright is [`RemoveNeighborhood`](super::RemoveNeighborhood)'s job.
///
/// Enumeration order is ascending `out`, then ascending `into`.
pub struct SwapNeighborhood;

impl Neighborhood for SwapNeighborhood {
    fn explore<'s>(&'s self, solution: &'s Solution<'_>) -> Box<dyn Iterator<Item = Move> + 's> {
        let instance = solution.instance();

        // Points covered by exactly one chosen set.
        let mut once = BitSet::new(instance.n_points());
        let mut multi = BitSet::new(instance.n_points());
        for set in solution.chosen_sets().iter() {
            let mut overlap = instance.covered_points(set).clone();
            overlap.intersect_with(&once);
            multi.union_with(&overlap);
            once.union_with(instance.covered_points(set));
        }
        once.difference_with(&multi);

        Box::new(solution.chosen_sets().iter().flat_map(move |out| {
            // Points covered by 'out' and by no other chosen set.
            let mut unique = instance.covered_points(out).clone();
            unique.intersect_with(&once);

            let candidates = if unique.is_empty() {
                0..0
            } else {
                0..instance.n_sets()
            };

            candidates
                .filter(move |&into| {
                    !solution.is_selected(into)
                        && instance.covered_points(into).contains_all(&unique)
                })
                .map(move |into| Move::Swap { out, into })
        }))
    }
}
