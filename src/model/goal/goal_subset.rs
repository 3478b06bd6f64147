use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A bit pattern over `[0, k)` naming a subset of goals. Bit `i` set means goal
/// at position `i` in the caller's `goal_order` belongs to the subset.
///
/// Subsets are capped at 32 goals (see [`MAX_GOALS`]); beyond that the search
/// space is not computationally tractable and `plot` rejects the input as a
/// contract violation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct GoalSubset(pub u64);

/// Largest number of goals a [`GoalSubset`] can address. `2^32 - 2` modes for a
/// single edge is already well beyond any tractable enumeration; the cap exists
/// to keep `1u64 << k` well defined and to fail fast rather than silently
/// overflow.
pub const MAX_GOALS: usize = 32;

impl GoalSubset {
    pub const EMPTY: GoalSubset = GoalSubset(0);

    /// the subset containing only goal `i`.
    pub fn singleton(i: usize) -> GoalSubset {
        GoalSubset(1u64 << i)
    }

    /// the subset containing every goal in `[0, k)`.
    pub fn full(k: usize) -> GoalSubset {
        if k >= 64 {
            GoalSubset(u64::MAX)
        } else {
            GoalSubset((1u64 << k) - 1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_full(&self, k: usize) -> bool {
        *self == GoalSubset::full(k)
    }

    pub fn contains(&self, goal: usize) -> bool {
        (self.0 >> goal) & 1 == 1
    }

    pub fn with(&self, goal: usize) -> GoalSubset {
        GoalSubset(self.0 | (1u64 << goal))
    }

    /// `self`'s complement relative to the full `k`-goal universe.
    pub fn complement(&self, k: usize) -> GoalSubset {
        GoalSubset(self.0 ^ GoalSubset::full(k).0)
    }

    pub fn union(&self, other: GoalSubset) -> GoalSubset {
        GoalSubset(self.0 | other.0)
    }

    pub fn intersects(&self, other: GoalSubset) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_disjoint(&self, other: GoalSubset) -> bool {
        !self.intersects(other)
    }

    pub fn popcount(&self) -> u32 {
        self.0.count_ones()
    }

    /// the goal indices present in this subset, ascending.
    pub fn iter_goals(&self) -> impl Iterator<Item = usize> + '_ {
        let bits = self.0;
        (0..MAX_GOALS as u32).filter(move |i| (bits >> i) & 1 == 1)
    }
}

impl Display for GoalSubset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_round_trips() {
        let k = 4;
        let s = GoalSubset(0b0101);
        assert_eq!(s.complement(k).complement(k), s);
        assert!(s.union(s.complement(k)).is_full(k));
        assert!(s.is_disjoint(s.complement(k)));
    }

    #[test]
    fn singleton_contains_only_itself() {
        let s = GoalSubset::singleton(2);
        assert!(s.contains(2));
        assert!(!s.contains(1));
        assert!(!s.contains(3));
    }

    #[test]
    fn iter_goals_lists_set_bits() {
        let s = GoalSubset(0b1011);
        assert_eq!(s.iter_goals().collect::<Vec<_>>(), vec![0, 1, 3]);
    }
}
