//! Domain model types for partial set covering.
//!
//! The universe is the point domain `[0, n_points)`, the pool is the set
//! domain `[0, n_sets)`. [`Instance`] holds the immutable coverage table
//! plus preprocessed dominance metadata; [`Solution`] is the mutable set
//! of chosen sets with a cached objective value; [`BitSet`] is the dense
//! bit-vector both are built on.

mod bitset;
mod instance;
mod solution;

pub use bitset::BitSet;
pub use instance::Instance;
pub use solution::Solution;
