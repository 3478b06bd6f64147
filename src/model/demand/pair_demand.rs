use super::{demand_error::DemandError, demand_function::DemandFunction};
use crate::model::capacity::Range;
use crate::model::goal::GoalSubset;

/// Per-goal produce/consume demand model. Each goal `g` both produces
/// `produce[g]` units of traffic and consumes `consume[g]` units, drawn from
/// everywhere else in the subset graph.
///
/// For a cut separating goal subset `s` (the from-set, reachable via an
/// edge's `finish`) from its complement, the ingress bandwidth — traffic
/// flowing toward `s` — is the smaller of what the complement can produce and
/// what `s` can actually consume: traffic the receiving side can't absorb is
/// never scheduled across the cut.
#[derive(Clone, Debug)]
pub struct PairDemand {
    produce: Vec<f64>,
    consume: Vec<f64>,
}

impl PairDemand {
    /// `produce[i]`/`consume[i]` are goal `i`'s production and consumption
    /// rates. Both slices must have the same length, which becomes `degree()`.
    pub fn new(produce: Vec<f64>, consume: Vec<f64>) -> Result<PairDemand, DemandError> {
        if produce.len() != consume.len() {
            return Err(DemandError::InternalError(format!(
                "produce vector has length {} but consume vector has length {}",
                produce.len(),
                consume.len()
            )));
        }
        Ok(PairDemand { produce, consume })
    }

    fn sum_over(&self, values: &[f64], subset: GoalSubset) -> f64 {
        subset.iter_goals().filter_map(|g| values.get(g)).sum()
    }
}

impl DemandFunction for PairDemand {
    fn degree(&self) -> usize {
        self.produce.len()
    }

    fn get(&self, subset: GoalSubset) -> Result<Range, DemandError> {
        self.validate_domain(subset)?;
        let complement = subset.complement(self.degree());
        let produced_outside = self.sum_over(&self.produce, complement);
        let consumed_inside = self.sum_over(&self.consume, subset);
        let bandwidth = produced_outside.min(consumed_inside);
        Ok(Range::new(bandwidth, bandwidth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bandwidth_is_min_of_partition_sums() {
        let d = PairDemand::new(vec![0.0, 10.0, 0.0], vec![7.0, 3.0, 4.0]).unwrap();
        let subset = GoalSubset::singleton(0);
        let r = d.get(subset).unwrap();
        // produced outside {1,2} = 10, consumed inside {0} = 7 -> min is 7
        assert_eq!(r.min(), 7.0);
        assert_eq!(r.max(), 7.0);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(PairDemand::new(vec![1.0], vec![1.0, 2.0]).is_err());
    }
}
