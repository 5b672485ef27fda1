//! Mutable solution state: chosen sets plus cached objective value.

use super::{BitSet, Instance};

/// The live solution of a single solver run.
///
/// A solution is a mutable bit-vector of chosen set indices plus a cached
/// score (the objective: number of chosen sets, minimized). It is owned
/// exclusively by one run: created by the constructive, mutated move-by-move
/// and by shaking, and discarded when the run ends.
///
/// After every mutation ([`add_set`](Solution::add_set) /
/// [`remove_set`](Solution::remove_set)),
/// [`notify_update`](Solution::notify_update) must be called before
/// [`score`](Solution::score) is read again; reading a stale score panics
/// so that a neighborhood forgetting the refresh surfaces immediately.
///
/// # Examples
///
/// ```
/// use u_setcover::models::{BitSet, Instance, Solution};
///
/// let instance = Instance::new("one", 1, 2, vec![BitSet::from_indices(2, &[0, 1])]);
/// let mut solution = Solution::new(&instance);
/// solution.add_set(0);
/// solution.notify_update();
/// assert_eq!(solution.score(), 1);
/// assert!(solution.is_feasible());
/// ```
#[derive(Debug, Clone)]
pub struct Solution<'a> {
    instance: &'a Instance,
    chosen: BitSet,
    score: usize,
    dirty: bool,
}

impl<'a> Solution<'a> {
    /// Minimum fraction of the point universe a feasible solution covers.
    pub const MIN_COVERAGE: f64 = 0.9;

    /// Creates an empty solution for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            chosen: BitSet::new(instance.n_sets()),
            score: 0,
            dirty: false,
        }
    }

    /// The instance this solution belongs to.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// The chosen sets, iterable in ascending index order.
    pub fn chosen_sets(&self) -> &BitSet {
        &self.chosen
    }

    /// Tests whether a set is currently chosen.
    pub fn is_selected(&self, set: usize) -> bool {
        self.chosen.contains(set)
    }

    /// Adds a set to the solution.
    ///
    /// # Panics
    ///
    /// Panics if the set is already selected.
    pub fn add_set(&mut self, set: usize) {
        assert!(!self.chosen.contains(set), "set {set} is already selected");
        self.chosen.insert(set);
        self.dirty = true;
    }

    /// Removes a set from the solution.
    ///
    /// # Panics
    ///
    /// Panics if the set is not currently selected.
    pub fn remove_set(&mut self, set: usize) {
        assert!(self.chosen.contains(set), "set {set} is not selected");
        self.chosen.remove(set);
        self.dirty = true;
    }

    /// The objective value: number of chosen sets.
    ///
    /// # Panics
    ///
    /// Panics if a mutation has happened since the last
    /// [`notify_update`](Solution::notify_update).
    pub fn score(&self) -> usize {
        assert!(
            !self.dirty,
            "score() read before notify_update() after a mutation"
        );
        self.score
    }

    /// Refreshes the cached score from the live chosen-set cardinality.
    pub fn notify_update(&mut self) {
        self.score = self.chosen.len();
        self.dirty = false;
    }

    /// Points covered by the union of all chosen sets.
    ///
    /// Recomputed from scratch on every call; nothing is cached between
    /// explorations.
    pub fn covered_points(&self) -> BitSet {
        let mut covered = BitSet::new(self.instance.n_points());
        for set in self.chosen.iter() {
            covered.union_with(self.instance.covered_points(set));
        }
        covered
    }

    /// Number of points covered by the chosen sets.
    pub fn covered_count(&self) -> usize {
        self.covered_points().len()
    }

    /// Fraction of the point universe covered. An empty universe counts as
    /// fully covered.
    pub fn coverage_ratio(&self) -> f64 {
        if self.instance.n_points() == 0 {
            return 1.0;
        }
        self.covered_count() as f64 / self.instance.n_points() as f64
    }

    /// Tests whether coverage meets the feasibility threshold.
    pub fn is_feasible(&self) -> bool {
        self.covered_count() >= self.instance.coverage_target()
    }
}
