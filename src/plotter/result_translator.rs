use std::collections::HashMap;

use crate::model::capacity::BidiCapacity;
use crate::model::demand::DemandFunction;
use crate::model::mode::ModeSet;
use crate::model::network::EdgeId;
use crate::model::Tree;

use super::plotter_error::PlotterError;

/// §4.7: turns one valid digit vector into the [`Tree`] it represents —
/// every in-use edge, mapped to the forward/reverse bandwidth pair its
/// chosen mode requires.
pub fn translate(
    digits: &[usize],
    positions: &[EdgeId],
    mode_sets: &HashMap<EdgeId, ModeSet>,
    demand: &dyn DemandFunction,
) -> Result<Tree, PlotterError> {
    let mut tree = Tree::new();

    for (position, &digit) in digits.iter().enumerate() {
        if digit == 0 {
            continue;
        }
        let edge_id = positions[position];
        let modes = mode_sets.get(&edge_id).ok_or_else(|| {
            PlotterError::Internal(format!(
                "digit position {position} references edge {edge_id}, which has no viable-mode set"
            ))
        })?;
        let mode = modes.mode_at(digit).ok_or_else(|| {
            PlotterError::Internal(format!(
                "digit {digit} is out of range for edge {edge_id}'s mode set"
            ))
        })?;
        let (ingress, egress) = demand.get_pair(mode.from_set())?;
        tree.insert(edge_id, BidiCapacity::new(ingress, egress));
    }

    Ok(tree)
}
