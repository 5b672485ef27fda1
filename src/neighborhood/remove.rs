//! Remove neighborhood: drop one set while staying feasible.

use super::{Move, Neighborhood};
use crate::models::Solution;

/// Generates a [`Move::Remove`] for every chosen set whose removal keeps
/// the covered fraction at or above the feasibility threshold, in ascending
/// set order.
///
/// Each candidate costs one bit-vector difference against the covered-point
/// union, which is built once per exploration.
pub struct RemoveNeighborhood;

impl Neighborhood for RemoveNeighborhood {
    fn explore<'s>(&'s self, solution: &'s Solution<'_>) -> Box<dyn Iterator<Item = Move> + 's> {
        let instance = solution.instance();
        let covered = solution.covered_points();
        let target = instance.coverage_target();

        Box::new(solution.chosen_sets().iter().filter_map(move |set| {
            let mut remaining = covered.clone();
            remaining.difference_with(instance.covered_points(set));
            (remaining.len() >= target).then_some(Move::Remove { set })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BitSet, Instance};

    fn instance(n_points: usize, sets: &[&[usize]]) -> Instance {
        let coverage = sets
            .iter()
            .map(|points| BitSet::from_indices(n_points, points))
            .collect();
        Instance::new("test", sets.len(), n_points, coverage)
    }

    #[test]
    fn test_redundant_set_yields_move() {
        // Set 1 is fully shadowed by set 0 once both are chosen.
        let ins = instance(4, &[&[0, 1, 2, 3], &[1, 2]]);
        let mut sol = Solution::new(&ins);
        sol.add_set(0);
        sol.add_set(1);
        sol.notify_update();

        let moves: Vec<Move> = RemoveNeighborhood.explore(&sol).collect();
        assert_eq!(moves, vec![Move::Remove { set: 1 }]);
    }

    #[test]
    fn test_no_move_when_every_set_needed() {
        let ins = instance(4, &[&[0, 1], &[2, 3]]);
        let mut sol = Solution::new(&ins);
        sol.add_set(0);
        sol.add_set(1);
        sol.notify_update();

        assert_eq!(RemoveNeighborhood.first(&sol), None);
    }

    #[test]
    fn test_slack_below_threshold_allows_removal() {
        // 10 points, target 9: chosen sets cover all 10, and dropping the
        // single-point set only drops coverage to 9.
        let ins = instance(
            10,
            &[&[0, 1, 2, 3, 4, 5, 6, 7, 8], &[9], &[0]],
        );
        let mut sol = Solution::new(&ins);
        sol.add_set(0);
        sol.add_set(1);
        sol.notify_update();

        let moves: Vec<Move> = RemoveNeighborhood.explore(&sol).collect();
        assert_eq!(moves, vec![Move::Remove { set: 1 }]);
    }

    #[test]
    fn test_first_takes_lowest_index() {
        // Both chosen sets are individually removable; ascending order means
        // set 0 comes first.
        let ins = instance(2, &[&[0, 1], &[0, 1]]);
        let mut sol = Solution::new(&ins);
        sol.add_set(0);
        sol.add_set(1);
        sol.notify_update();

        assert_eq!(RemoveNeighborhood.first(&sol), Some(Move::Remove { set: 0 }));
    }

    #[test]
    fn test_empty_solution_has_no_moves() {
        let ins = instance(0, &[]);
        let sol = Solution::new(&ins);
        assert_eq!(RemoveNeighborhood.first(&sol), None);
    }
}
