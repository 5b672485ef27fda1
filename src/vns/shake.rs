//! Randomized perturbation to escape local optima.

use crate::models::Solution;
use crate::neighborhood::{Neighborhood, RemoveNeighborhood};
use rand::Rng;

/// Perturbs the solution: adds `k` uniformly-random unselected sets, then
/// repeatedly drops the first available redundant set until none remains.
///
/// Each of the `k` draws resamples while it hits an already-chosen set, up
/// to 10 total attempts; an exhausted draw is skipped silently. The cleanup
/// loop re-explores the Remove neighborhood after every application, so a
/// removal that uncovers further redundancy is picked up in the same call.
///
/// The controller calls this with `k = 1` whenever a full neighborhood
/// cycle yields no move.
pub fn shake<R: Rng>(solution: &mut Solution<'_>, k: usize, rng: &mut R) {
    let n_sets = solution.instance().n_sets();

    for _ in 0..k {
        let mut set = rng.random_range(0..n_sets);
        let mut tries = 0;
        while solution.is_selected(set) {
            tries += 1;
            if tries >= 10 {
                break;
            }
            set = rng.random_range(0..n_sets);
        }

        if !solution.is_selected(set) {
            solution.add_set(set);
            solution.notify_update();
        }
    }

    let remove = RemoveNeighborhood;
    while let Some(mv) = remove.first(solution) {
        mv.apply(solution);
    }
}
