//! Greedy constructive heuristic.
//!
//! # Algorithm
//!
//! Two phases:
//!
//! 1. **Greedy add** — while coverage is below the feasibility target,
//!    insert the unselected set covering the maximum number of currently
//!    uncovered points. Ties on a positive gain are broken by a coin flip
//!    against the incumbent: each later equal candidate replaces the
//!    current pick with probability 1/2, so the last equal candidates are
//!    favored over a uniform choice among all of them.
//! 2. **Redundancy removal** — one forward pass over the chosen sets in
//!    ascending index order, dropping each set whose removal keeps coverage
//!    at or above the target. The pass is order-dependent and deliberately
//!    not iterated to a fixpoint; sets already visited are never revisited.
//!
//! Coverage bookkeeping is incremental: a per-point count of chosen sets
//! covering it, so gain and loss checks never rescan the whole selection.
//!
//! # Reference
//!
//! Chvátal, V. (1979). "A greedy heuristic for the set-covering problem",
//! *Mathematics of Operations Research* 4(3), 233-235.

use crate::models::{Instance, Solution};
use rand::Rng;

/// Builds an initial solution greedily, then strips redundant sets.
///
/// The returned solution meets the coverage target whenever the full set
/// pool does. On an infeasible instance the greedy phase stops once every
/// set is selected and the (still infeasible) solution is returned;
/// [`Solution::is_feasible`] exposes the condition.
///
/// # Examples
///
/// ```
/// use u_setcover::constructive::greedy_construct;
/// use u_setcover::models::{BitSet, Instance};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let coverage = vec![
///     BitSet::from_indices(10, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
///     BitSet::from_indices(10, &[0, 1]),
/// ];
/// let instance = Instance::new("full", 2, 10, coverage);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let solution = greedy_construct(&instance, &mut rng);
/// assert_eq!(solution.score(), 1);
/// assert!(solution.is_selected(0));
/// ```
pub fn greedy_construct<'a, R: Rng>(instance: &'a Instance, rng: &mut R) -> Solution<'a> {
    let n_points = instance.n_points();
    let n_sets = instance.n_sets();
    let target = instance.coverage_target();

    let mut solution = Solution::new(instance);

    // Per-point count of chosen sets covering it; local to this call.
    let mut cover_count = vec![0u32; n_points];
    let mut covered = 0usize;

    // Phase 1: greedy add until the coverage target is met.
    while covered < target {
        let mut best_set = None;
        let mut best_gain: i64 = -1;

        for s in 0..n_sets {
            if solution.is_selected(s) {
                continue;
            }
            let gain = instance
                .covered_points(s)
                .iter()
                .filter(|&p| cover_count[p] == 0)
                .count() as i64;

            if gain > best_gain {
                best_gain = gain;
                best_set = Some(s);
            } else if gain == best_gain && gain > 0 && rng.random_bool(0.5) {
                best_set = Some(s);
            }
        }

        // The pool is exhausted: the instance cannot reach the target.
        let Some(best) = best_set else {
            break;
        };

        solution.add_set(best);
        for p in instance.covered_points(best).iter() {
            if cover_count[p] == 0 {
                covered += 1;
            }
            cover_count[p] += 1;
        }
    }

    // Phase 2: single forward pass dropping redundant sets.
    let chosen: Vec<usize> = solution.chosen_sets().iter().collect();
    for s in chosen {
        let covers = instance.covered_points(s);

        let mut would_lose = 0usize;
        for p in covers.iter() {
            if cover_count[p] == 1 {
                would_lose += 1;
                if covered - would_lose < target {
                    break;
                }
            }
        }

        if covered - would_lose >= target {
            solution.remove_set(s);
            for p in covers.iter() {
                cover_count[p] -= 1;
                if cover_count[p] == 0 {
                    covered -= 1;
                }
            }
        }
    }

    solution.notify_update();
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BitSet;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn instance(n_points: usize, sets: &[&[usize]]) -> Instance {
        let coverage = sets
            .iter()
            .map(|points| BitSet::from_indices(n_points, points))
            .collect();
        Instance::new("test", sets.len(), n_points, coverage)
    }

    #[test]
    fn test_two_disjoint_sets_both_needed() {
        // 4 points, target ceil(3.6) = 4: both halves are required.
        let ins = instance(4, &[&[0, 1], &[2, 3]]);
        let mut rng = StdRng::seed_from_u64(42);
        let sol = greedy_construct(&ins, &mut rng);
        assert_eq!(sol.score(), 2);
        assert_eq!(sol.chosen_sets().to_vec(), vec![0, 1]);
        assert!(sol.is_feasible());
    }

    #[test]
    fn test_full_cover_set_wins_alone() {
        // 10 points, target 9: one set covers everything.
        let ins = instance(10, &[&[0, 1], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], &[5]]);
        let mut rng = StdRng::seed_from_u64(42);
        let sol = greedy_construct(&ins, &mut rng);
        assert_eq!(sol.score(), 1);
        assert!(sol.is_selected(1));
    }

    #[test]
    fn test_redundant_set_removed() {
        // A and B tie on gain 5. If the coin flip picks B first, greedy ends
        // up with all three sets and the removal pass must strip B again.
        // Either way the result is {A, C} with score 2.
        let ins = instance(
            10,
            &[
                &[0, 1, 2, 3, 4],    // A
                &[3, 4, 5, 6, 7],    // B
                &[6, 7, 8, 9],       // C
            ],
        );
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sol = greedy_construct(&ins, &mut rng);
            assert!(sol.is_feasible(), "seed {seed} produced infeasible solution");
            assert_eq!(sol.score(), 2, "seed {seed} kept a redundant set");
        }
    }

    #[test]
    fn test_infeasible_instance_selects_whole_pool() {
        // Only 1 of 10 points coverable; target 9 is unreachable.
        let ins = instance(10, &[&[0], &[0]]);
        let mut rng = StdRng::seed_from_u64(42);
        let sol = greedy_construct(&ins, &mut rng);
        assert!(!sol.is_feasible());
        assert_eq!(sol.score(), 2);
    }

    #[test]
    fn test_empty_universe_yields_empty_solution() {
        let ins = instance(0, &[]);
        let mut rng = StdRng::seed_from_u64(42);
        let sol = greedy_construct(&ins, &mut rng);
        assert_eq!(sol.score(), 0);
        assert!(sol.is_feasible());
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let ins = instance(
            8,
            &[&[0, 1, 2], &[2, 3, 4], &[4, 5, 6], &[6, 7], &[1, 3, 5, 7]],
        );
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = greedy_construct(&ins, &mut rng_a);
        let b = greedy_construct(&ins, &mut rng_b);
        assert_eq!(a.chosen_sets(), b.chosen_sets());
    }

    fn arb_instance() -> impl Strategy<Value = Instance> {
        (1usize..20, 1usize..10).prop_flat_map(|(n_points, n_sets)| {
            proptest::collection::vec(
                proptest::collection::vec(0..n_points, 0..=n_points),
                n_sets,
            )
            .prop_map(move |sets| {
                let coverage = sets
                    .iter()
                    .map(|points| BitSet::from_indices(n_points, points))
                    .collect();
                Instance::new("prop", sets.len(), n_points, coverage)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_feasible_whenever_pool_allows(ins in arb_instance(), seed in 0u64..1000) {
            let mut rng = StdRng::seed_from_u64(seed);
            let sol = greedy_construct(&ins, &mut rng);

            let mut pool_union = BitSet::new(ins.n_points());
            for s in 0..ins.n_sets() {
                pool_union.union_with(ins.covered_points(s));
            }

            if pool_union.len() >= ins.coverage_target() {
                prop_assert!(sol.is_feasible());
            } else {
                // Infeasible instance: the bounded fallback selects everything.
                prop_assert_eq!(sol.score(), ins.n_sets());
            }
        }

        #[test]
        fn prop_score_matches_cardinality(ins in arb_instance(), seed in 0u64..1000) {
            let mut rng = StdRng::seed_from_u64(seed);
            let sol = greedy_construct(&ins, &mut rng);
            prop_assert_eq!(sol.score(), sol.chosen_sets().len());
        }
    }
}
