//! Variable Neighborhood Search for partial set covering.
//!
//! # Algorithm
//!
//! 1. Build an initial feasible solution with the greedy constructive
//! 2. Cycle the neighborhoods Remove → Swap → Add, taking the FIRST
//!    available move of the current one (first-improvement, not
//!    best-improvement)
//! 3. A move that improves on the best score seen resets the cycle to
//!    Remove and clears the plateau counter; anything else advances the
//!    cycle and counts toward the plateau
//! 4. A full cycle with no applicable move anywhere triggers a shake:
//!    one random set added, then all newly redundant sets dropped
//! 5. Stop after 200 consecutive non-improving iterations and return the
//!    live solution
//!
//! The run is single-threaded and deterministic: one seeded RNG stream is
//! threaded through the constructive and every shake in mutation order, and
//! all neighborhood enumeration orders are fixed.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;
mod shake;

pub use config::VnsConfig;
pub use runner::{VnsResult, VnsRunner};
pub use shake::shake;
