//! # u-setcover
//!
//! Heuristic solver for the Partial Set Covering Problem (PSCP): choose a
//! minimum-size collection of sets from a finite pool so that their union
//! covers at least 90% of a finite point universe — a relaxation of exact
//! set cover.
//!
//! The solver combines a greedy constructive heuristic with a
//! first-improvement Variable Neighborhood Search (VNS) over three move
//! neighborhoods (Remove, Swap, Add) and a randomized shake step. All
//! coverage state is kept in dense bit-vectors so the hot path is
//! word-parallel.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (`BitSet`, `Instance`, `Solution`)
//! - [`constructive`] — Greedy constructive heuristic
//! - [`neighborhood`] — Move neighborhoods and the `Move` type
//! - [`vns`] — Variable Neighborhood Search controller and shake
//!
//! ## Example
//!
//! ```
//! use u_setcover::models::{BitSet, Instance};
//! use u_setcover::vns::{VnsConfig, VnsRunner};
//!
//! // Two sets that together cover the whole 4-point universe.
//! let coverage = vec![
//!     BitSet::from_indices(4, &[0, 1]),
//!     BitSet::from_indices(4, &[2, 3]),
//! ];
//! let instance = Instance::new("tiny", 2, 4, coverage);
//!
//! let result = VnsRunner::run(&instance, &VnsConfig::default().with_seed(42));
//! assert_eq!(result.score, 2);
//! assert!(result.solution.is_feasible());
//! ```

pub mod constructive;
pub mod models;
pub mod neighborhood;
pub mod vns;
