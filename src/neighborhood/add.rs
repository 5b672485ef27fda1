//! Add neighborhood: grow the solution by one useful set.

use super::{Move, Neighborhood};
use crate::models::Solution;

/// Generates a [`Move::Add`] for every unselected set covering at least one
/// currently uncovered point, in ascending set order.
///
/// Adding always worsens the objective by one. The neighborhood exists so
/// the search can reach states where a later Remove or Swap pays the cost
/// back; sets whose coverage is already fully covered are never offered.
pub struct AddNeighborhood;

impl Neighborhood for AddNeighborhood {
    fn explore<'s>(&'s self, solution: &'s Solution<'_>) -> Box<dyn Iterator<Item = Move> + 's> {
        let instance = solution.instance();
        let covered = solution.covered_points();

        Box::new(
            (0..instance.n_sets())
                .filter(move |&set| {
                    !solution.is_selected(set)
                        && !covered.contains_all(instance.covered_points(set))
                })
                .map(|set| Move::Add { set }),
        )
    }
}
