//! VNS execution engine.

use super::config::VnsConfig;
use super::shake::shake;
use crate::constructive::greedy_construct;
use crate::models::{Instance, Solution};
use crate::neighborhood::{AddNeighborhood, Neighborhood, RemoveNeighborhood, SwapNeighborhood};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a VNS run.
///
/// The returned solution is the LIVE solution at termination, not a
/// best-seen snapshot: a shake that worsens the objective late in the run
/// is not rolled back. `best_score` records the best score observed, so a
/// caller can detect when the two diverge.
#[derive(Debug, Clone)]
pub struct VnsResult<'a> {
    /// The live solution at termination.
    pub solution: Solution<'a>,
    /// Score of the returned solution.
    pub score: usize,
    /// Best score observed at any point of the run.
    pub best_score: usize,
    /// Total controller iterations executed.
    pub iterations: usize,
    /// Best score after each iteration; non-increasing.
    pub score_history: Vec<usize>,
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Executes the search on the given instance.
    ///
    /// Builds the initial solution with
    /// [`greedy_construct`](crate::constructive::greedy_construct), then
    /// cycles the Remove → Swap → Add neighborhoods first-improvement
    /// style until `config.max_plateau` consecutive iterations pass
    /// without improving on the best score seen. A full cycle in which no
    /// neighborhood offers any move triggers a [`shake`].
    ///
    /// Deterministic for a fixed `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_setcover::models::{BitSet, Instance};
    /// use u_setcover::vns::{VnsConfig, VnsRunner};
    ///
    /// let coverage = vec![
    ///     BitSet::from_indices(10, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
    ///     BitSet::from_indices(10, &[3, 4]),
    /// ];
    /// let instance = Instance::new("dominated", 2, 10, coverage);
    ///
    /// let result = VnsRunner::run(&instance, &VnsConfig::default().with_seed(42));
    /// assert_eq!(result.score, 1);
    /// assert!(result.solution.is_selected(0));
    /// ```
    pub fn run<'a>(instance: &'a Instance, config: &VnsConfig) -> VnsResult<'a> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(42),
        };

        let mut current = greedy_construct(instance, &mut rng);

        let neighborhoods: [&dyn Neighborhood; 3] =
            [&RemoveNeighborhood, &SwapNeighborhood, &AddNeighborhood];

        let mut best_score = current.score();
        let mut plateau = 0usize;
        let mut k = 0usize;
        let mut iterations = 0usize;
        let mut score_history = Vec::new();

        while plateau < config.max_plateau {
            iterations += 1;

            match neighborhoods[k].first(&current) {
                Some(mv) => {
                    // First-improvement: apply the first move found.
                    mv.apply(&mut current);

                    if current.score() < best_score {
                        best_score = current.score();
                        k = 0;
                        plateau = 0;
                    } else {
                        k = (k + 1) % neighborhoods.len();
                        plateau += 1;
                    }
                }
                None => {
                    k = (k + 1) % neighborhoods.len();
                    if k == 0 {
                        // Full cycle with no applicable move anywhere.
                        shake(&mut current, config.shake_strength, &mut rng);
                    }
                    plateau += 1;
                }
            }

            score_history.push(best_score);
        }

        VnsResult {
            score: current.score(),
            best_score,
            iterations,
            score_history,
            solution: current,
        }
    }
}
