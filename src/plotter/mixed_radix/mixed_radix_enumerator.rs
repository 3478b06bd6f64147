use std::collections::HashMap;
use std::sync::Arc;

use crate::model::mode::ModeSet;
use crate::model::network::EdgeId;

use crate::plotter::constraint::Constraint;

/// §4.6: the mixed-radix search over digit assignments, pruned by the
/// constraints built in §4.5.
///
/// `digits[i]` ranges over `[0, radices[i])`; `0` means "edge at position
/// `i` unused". `invalidated` counts how many of the low-order digits still
/// need revalidation since the last change — it is the engine's only piece
/// of search state besides the digits themselves, and it is what lets
/// `next_valid` resume a branch instead of rechecking the whole vector on
/// every step.
pub struct MixedRadixEnumerator {
    radices: Vec<usize>,
    digits: Vec<usize>,
    invalidated: usize,
    constraints_by_anchor: Vec<Vec<Box<dyn Constraint>>>,
    mode_sets: Arc<HashMap<EdgeId, ModeSet>>,
    exhausted: bool,
    /// true once a solution has been handed back, so the next call knows to
    /// step off it before searching for the one after.
    yielded: bool,
}

impl MixedRadixEnumerator {
    /// `radices[i]` must be `>= 1` (every retained edge has at least one
    /// viable mode, so `radix = modes + 1 >= 2`); `constraints_by_anchor`
    /// must have exactly `radices.len()` entries, one per digit position.
    pub fn new(
        radices: Vec<usize>,
        constraints_by_anchor: Vec<Vec<Box<dyn Constraint>>>,
        mode_sets: Arc<HashMap<EdgeId, ModeSet>>,
    ) -> MixedRadixEnumerator {
        let n = radices.len();
        debug_assert_eq!(constraints_by_anchor.len(), n);
        MixedRadixEnumerator {
            digits: vec![0; n],
            invalidated: n,
            radices,
            constraints_by_anchor,
            mode_sets,
            exhausted: n == 0,
            yielded: false,
        }
    }

    /// increments the digit at position `i`, carrying upward through higher
    /// positions as needed. Returns `false` if the carry overflows past the
    /// most significant digit (the space is exhausted).
    fn increment_at(&mut self, mut i: usize) -> bool {
        loop {
            self.digits[i] += 1;
            if self.digits[i] < self.radices[i] {
                if self.invalidated <= i {
                    self.invalidated = i + 1;
                }
                return true;
            }
            self.digits[i] = 0;
            if i + 1 >= self.radices.len() {
                return false;
            }
            i += 1;
        }
    }

    fn anchored_constraints_hold(&self, position: usize) -> bool {
        self.constraints_by_anchor[position]
            .iter()
            .all(|c| c.check(&self.digits, self.mode_sets.as_ref()))
    }

    /// advances to the next valid digit assignment, or `None` once the
    /// search space is exhausted. Each call mutates internal state only;
    /// the returned slice borrows the freshly-validated digit vector.
    pub fn next_valid(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if self.yielded {
            // step off the vector we handed back last time before searching
            // for the next one, re-arming validation at position 0.
            if !self.increment_at(0) {
                self.exhausted = true;
                return None;
            }
        }
        loop {
            while self.invalidated > 0 {
                self.invalidated -= 1;
                let i = self.invalidated;
                if !self.anchored_constraints_hold(i) {
                    for d in self.digits[0..i].iter_mut() {
                        *d = 0;
                    }
                    if !self.increment_at(i) {
                        self.exhausted = true;
                        return None;
                    }
                    break;
                }
            }
            if self.invalidated == 0 {
                self.yielded = true;
                return Some(&self.digits);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausts_the_full_space_without_constraints_in_lexicographic_order() {
        // no constraints at any anchor => every combination is valid, and the
        // least significant position (0) should change fastest.
        let bases = vec![2usize, 3, 2];
        let constraints: Vec<Vec<Box<dyn Constraint>>> = (0..3).map(|_| Vec::new()).collect();
        let mut e = MixedRadixEnumerator::new(bases, constraints, Arc::new(HashMap::new()));

        let mut found = Vec::new();
        while let Some(d) = e.next_valid() {
            found.push(d.to_vec());
        }
        assert_eq!(found.len(), 2 * 3 * 2);
        assert_eq!(found[0], vec![0, 0, 0]);
        assert_eq!(found[1], vec![1, 0, 0]);
        assert_eq!(found[2], vec![0, 1, 0]);
        assert_eq!(*found.last().unwrap(), vec![1, 2, 1]);
        // a second call after exhaustion keeps returning None.
        assert!(e.next_valid().is_none());
    }

    #[test]
    fn increment_at_carries_through_saturated_digits() {
        let radices = vec![2usize, 1, 3];
        let constraints: Vec<Vec<Box<dyn Constraint>>> = (0..3).map(|_| Vec::new()).collect();
        let mut e = MixedRadixEnumerator::new(radices, constraints, Arc::new(HashMap::new()));
        // position 1 has radix 1, meaning it can only ever be 0: incrementing
        // at position 0 (radix 2) should carry straight through position 1.
        e.digits = vec![1, 0, 0];
        assert!(e.increment_at(0));
        assert_eq!(e.digits, vec![0, 0, 1]);
    }

    #[test]
    fn overflow_past_the_most_significant_digit_exhausts() {
        let radices = vec![1usize];
        let constraints: Vec<Vec<Box<dyn Constraint>>> = vec![Vec::new()];
        let mut e = MixedRadixEnumerator::new(radices, constraints, Arc::new(HashMap::new()));
        assert!(!e.increment_at(0));
    }

    #[test]
    fn consecutive_calls_never_repeat_a_solution() {
        let radices = vec![2usize, 2];
        let constraints: Vec<Vec<Box<dyn Constraint>>> = (0..2).map(|_| Vec::new()).collect();
        let mut e = MixedRadixEnumerator::new(radices, constraints, Arc::new(HashMap::new()));

        let first = e.next_valid().unwrap().to_vec();
        let second = e.next_valid().unwrap().to_vec();
        assert_ne!(first, second);
        assert_eq!(first, vec![0, 0]);
        assert_eq!(second, vec![1, 0]);
    }
}
