//! Problem instance: immutable coverage table plus preprocessed metadata.

use super::{BitSet, Solution};

/// A partial set covering instance.
///
/// Holds the per-set coverage table, immutable after construction, and two
/// pieces of metadata precomputed once at build time:
///
/// - **useless sets** — sets that cover no point, or whose coverage is a
///   subset of some other set's coverage. There is always an at least as
///   good alternative, so a solver never needs them. Advisory only: the
///   neighborhoods do not currently filter on it.
/// - **support sets** — sets that are the sole coverer of at least one
///   point. With a coverage threshold below 1.0 these are not necessarily
///   part of any solution; also advisory.
///
/// # Examples
///
/// ```
/// use u_setcover::models::{BitSet, Instance};
///
/// let coverage = vec![
///     BitSet::from_indices(3, &[0, 1, 2]),
///     BitSet::from_indices(3, &[0, 1]), // subset of set 0
/// ];
/// let instance = Instance::new("pair", 2, 3, coverage);
/// assert!(instance.useless_sets().contains(1));
/// assert!(!instance.useless_sets().contains(0));
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    n_sets: usize,
    n_points: usize,
    coverage: Vec<BitSet>,
    useless_sets: BitSet,
    support_sets: BitSet,
}

impl Instance {
    /// Builds an instance and runs both preprocessing passes.
    ///
    /// The dominance pass is `O(n_sets²)` set comparisons; the support pass
    /// is `O(n_points · n_sets)`. Both run once, here.
    ///
    /// # Panics
    ///
    /// Panics if `coverage.len() != n_sets` or any coverage set's capacity
    /// differs from `n_points`.
    pub fn new(
        name: impl Into<String>,
        n_sets: usize,
        n_points: usize,
        coverage: Vec<BitSet>,
    ) -> Self {
        assert_eq!(
            coverage.len(),
            n_sets,
            "coverage table must have one entry per set"
        );
        for (s, set) in coverage.iter().enumerate() {
            assert_eq!(
                set.capacity(),
                n_points,
                "coverage of set {s} must span the point universe"
            );
        }

        let mut useless_sets = BitSet::new(n_sets);
        for i in 0..n_sets {
            if coverage[i].is_empty() {
                useless_sets.insert(i);
            } else {
                for j in 0..n_sets {
                    if i != j && coverage[i].contains_all(&coverage[j]) {
                        useless_sets.insert(j);
                    }
                }
            }
        }

        let mut support_sets = BitSet::new(n_sets);
        for p in 0..n_points {
            let mut covered_by = BitSet::new(n_sets);
            for s in 0..n_sets {
                if coverage[s].contains(p) {
                    covered_by.insert(s);
                }
            }
            if covered_by.len() == 1 {
                if let Some(s) = covered_by.iter().next() {
                    support_sets.insert(s);
                }
            }
        }

        Self {
            name: name.into(),
            n_sets,
            n_points,
            coverage,
            useless_sets,
            support_sets,
        }
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of sets in the pool.
    pub fn n_sets(&self) -> usize {
        self.n_sets
    }

    /// Number of points in the universe.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Points covered by the given set.
    pub fn covered_points(&self, set: usize) -> &BitSet {
        &self.coverage[set]
    }

    /// The full coverage table.
    pub fn coverage(&self) -> &[BitSet] {
        &self.coverage
    }

    /// Sets that are empty or dominated by another set's coverage.
    pub fn useless_sets(&self) -> &BitSet {
        &self.useless_sets
    }

    /// Sets that are the sole coverer of at least one point.
    pub fn support_sets(&self) -> &BitSet {
        &self.support_sets
    }

    /// Minimum number of covered points a feasible solution needs:
    /// `ceil(MIN_COVERAGE * n_points)`.
    pub fn coverage_target(&self) -> usize {
        (Solution::MIN_COVERAGE * self.n_points as f64).ceil() as usize
    }
}
