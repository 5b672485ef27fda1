//! Fixed-capacity dense bit-set.

use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity set of `usize` indices backed by a dense bit-vector.
///
/// All set operations (union, intersection, difference, cardinality) run
/// word-parallel. Membership indices are 0-based and must be below the
/// capacity fixed at construction.
///
/// Iteration via [`iter`](BitSet::iter) yields members in ascending order
/// and ends cleanly after the last member; no end-of-domain sentinel is
/// involved.
///
/// # Panics
///
/// [`insert`](BitSet::insert), [`remove`](BitSet::remove) and
/// [`contains`](BitSet::contains) panic on an index at or beyond the
/// capacity.
///
/// # Examples
///
/// ```
/// use u_setcover::models::BitSet;
///
/// let mut set = BitSet::new(8);
/// set.insert(1);
/// set.insert(4);
/// assert!(set.contains(4));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitSet {
    bits: BitVec,
    capacity: usize,
}

impl BitSet {
    /// Creates an empty set with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Creates a set containing the given indices.
    pub fn from_indices(capacity: usize, indices: &[usize]) -> Self {
        let mut set = Self::new(capacity);
        for &i in indices {
            set.insert(i);
        }
        set
    }

    /// Capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an index.
    pub fn insert(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    /// Removes an index.
    pub fn remove(&mut self, index: usize) {
        self.bits.set(index, false);
    }

    /// Tests membership.
    pub fn contains(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Tests whether no index is a member.
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Adds every member of `other` to this set in-place.
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Keeps only members also present in `other`.
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Removes every member of `other` from this set in-place.
    pub fn difference_with(&mut self, other: &Self) {
        let complement = !other.bits.clone();
        self.bits &= &complement;
    }

    /// Tests whether every member of `other` is also a member of this set.
    pub fn contains_all(&self, other: &Self) -> bool {
        let mut missing = other.clone();
        missing.difference_with(self);
        missing.is_empty()
    }

    /// Iterates members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extracts all members as a vector, ascending.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet({} of {}: {:?})", self.len(), self.capacity, self.to_vec())
    }
}
