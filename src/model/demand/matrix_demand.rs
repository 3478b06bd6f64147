use super::{demand_error::DemandError, demand_function::DemandFunction};
use crate::model::capacity::Range;
use crate::model::goal::GoalSubset;

/// Per-(source, destination) goal-pair demand model. `matrix[src][dst]` is the
/// bandwidth that must flow from goal `src` to goal `dst`.
///
/// The ingress bandwidth for a from-set `s` (reachable via an edge's
/// `finish`) is the sum of every pair whose source lies outside `s` and whose
/// destination lies inside `s` — traffic converging on `s` from the rest of
/// the network.
#[derive(Clone, Debug)]
pub struct MatrixDemand {
    matrix: Vec<Vec<f64>>,
}

impl MatrixDemand {
    /// `matrix` must be square; `matrix.len()` becomes `degree()`.
    pub fn new(matrix: Vec<Vec<f64>>) -> Result<MatrixDemand, DemandError> {
        let k = matrix.len();
        for row in &matrix {
            if row.len() != k {
                return Err(DemandError::InternalError(format!(
                    "demand matrix is not square: expected {k} columns, found row of length {}",
                    row.len()
                )));
            }
        }
        Ok(MatrixDemand { matrix })
    }

    fn crossing_sum(&self, from: GoalSubset, to: GoalSubset) -> f64 {
        let mut total = 0.0;
        for src in from.iter_goals() {
            for dst in to.iter_goals() {
                if let Some(row) = self.matrix.get(src) {
                    if let Some(v) = row.get(dst) {
                        total += v;
                    }
                }
            }
        }
        total
    }
}

impl DemandFunction for MatrixDemand {
    fn degree(&self) -> usize {
        self.matrix.len()
    }

    fn get(&self, subset: GoalSubset) -> Result<Range, DemandError> {
        self.validate_domain(subset)?;
        let complement = subset.complement(self.degree());
        let bandwidth = self.crossing_sum(complement, subset);
        Ok(Range::new(bandwidth, bandwidth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_pairs_crossing_the_cut() {
        // goals: 0, 1, 2. traffic 5 from 0->2, 2 from 1->2, 1 from 2->0.
        let matrix = vec![
            vec![0.0, 0.0, 5.0],
            vec![0.0, 0.0, 2.0],
            vec![1.0, 0.0, 0.0],
        ];
        let d = MatrixDemand::new(matrix).unwrap();
        let subset = GoalSubset::singleton(2);
        let (ingress, egress) = d.get_pair(subset).unwrap();
        // ingress: traffic from {0,1} into {2} = 5 + 2 = 7
        assert_eq!(ingress.min(), 7.0);
        // egress: traffic from {2} into {0,1} = 1
        assert_eq!(egress.min(), 1.0);
    }

    #[test]
    fn rejects_non_square_matrix() {
        let matrix = vec![vec![0.0, 0.0], vec![0.0]];
        assert!(MatrixDemand::new(matrix).is_err());
    }
}
