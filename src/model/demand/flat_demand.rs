use super::{demand_error::DemandError, demand_function::DemandFunction};
use crate::model::capacity::Range;
use crate::model::goal::GoalSubset;

/// The simplest canonical demand function: every cut, regardless of which
/// goals fall on which side, requires the same bandwidth range in both
/// directions.
#[derive(Clone, Debug)]
pub struct FlatDemand {
    degree: usize,
    range: Range,
}

impl FlatDemand {
    pub fn new(degree: usize, range: Range) -> FlatDemand {
        FlatDemand { degree, range }
    }
}

impl DemandFunction for FlatDemand {
    fn degree(&self) -> usize {
        self.degree
    }

    fn get(&self, subset: GoalSubset) -> Result<Range, DemandError> {
        self.validate_domain(subset)?;
        Ok(self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_demand_ignores_subset_shape() {
        let d = FlatDemand::new(3, Range::new(1.0, 1.0));
        let a = d.get(GoalSubset(0b001)).unwrap();
        let b = d.get(GoalSubset(0b110)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn flat_demand_rejects_out_of_domain_subsets() {
        let d = FlatDemand::new(2, Range::new(1.0, 1.0));
        assert!(d.get(GoalSubset::EMPTY).is_err());
        assert!(d.get(GoalSubset::full(2)).is_err());
    }
}
