use derive_more::{Add, Sum};
use ordered_float::OrderedFloat;
use std::fmt::Display;

/// The scalar weight of an edge, used by the router's shortest-path
/// computation. Carries no units — the caller's topology defines what "cost"
/// means (hop count, latency, distance).
///
/// Equality and ordering go through [`OrderedFloat`] so `Cost` can be used as
/// a priority in ordered containers; for "is this the same cost" comparisons
/// the router uses [`Cost::approx_eq`] instead, at the epsilon documented
/// there, rather than bitwise float equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Add, Sum)]
pub struct Cost(OrderedFloat<f64>);

/// relative epsilon used by [`Cost::approx_eq`] and by the router's
/// unsuitability comparison against the bias threshold.
pub const COST_EPSILON: f64 = 1e-9;

impl Cost {
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));
    pub const INFINITY: Cost = Cost(OrderedFloat(f64::INFINITY));

    pub fn new(value: f64) -> Cost {
        Cost(OrderedFloat(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0 .0
    }

    pub fn is_finite(&self) -> bool {
        self.0 .0.is_finite()
    }

    /// true when `self` and `other` are within [`COST_EPSILON`] relative
    /// tolerance of each other, in place of IEEE-754 equality.
    pub fn approx_eq(&self, other: &Cost) -> bool {
        let (a, b) = (self.as_f64(), other.as_f64());
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= COST_EPSILON * scale
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_tolerates_epsilon_noise() {
        let a = Cost::new(1.000_000_000_1);
        let b = Cost::new(1.0);
        assert!(a.approx_eq(&b));
    }

    #[test]
    fn approx_eq_rejects_real_differences() {
        let a = Cost::new(1.01);
        let b = Cost::new(1.0);
        assert!(!a.approx_eq(&b));
    }
}
