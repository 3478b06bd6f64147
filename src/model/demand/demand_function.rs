use super::demand_error::DemandError;
use crate::model::capacity::Range;
use crate::model::goal::GoalSubset;

/// Maps a non-empty, non-full subset of goals to the bandwidth an edge carrying
/// traffic for exactly that subset must support in each direction.
///
/// Implementations are expected to be pure and independent of invocation order:
/// the plotter may call `get`/`get_pair` for the same subset many times over the
/// course of one [`plot`] call and must see the same answer every time.
///
/// [`plot`]: crate::plot
pub trait DemandFunction: Send + Sync {
    /// the number of goals `k` this demand function is defined over.
    fn degree(&self) -> usize;

    /// one-direction bandwidth range required on a cut carrying traffic for
    /// `subset` on the "from" side.
    ///
    /// # Arguments
    ///
    /// * `subset` - a goal-subset strictly between the empty set and the full
    ///   goal set.
    fn get(&self, subset: GoalSubset) -> Result<Range, DemandError>;

    /// convenience returning both directions for `subset`: `ingress` is
    /// `get(subset)`, `egress` is `get(subset.complement(degree()))`.
    fn get_pair(&self, subset: GoalSubset) -> Result<(Range, Range), DemandError> {
        let k = self.degree();
        let ingress = self.get(subset)?;
        let egress = self.get(subset.complement(k))?;
        Ok((ingress, egress))
    }

    /// validates that `subset` is in the domain this trait's contract allows:
    /// non-empty and not the full goal set.
    fn validate_domain(&self, subset: GoalSubset) -> Result<(), DemandError> {
        let k = self.degree();
        if subset.is_empty() || subset.is_full(k) {
            Err(DemandError::SubsetOutOfDomain(subset))
        } else {
            Ok(())
        }
    }
}
