use std::collections::HashMap;

use crate::model::demand::DemandFunction;
use crate::model::goal::GoalSubset;
use crate::model::mode::{Mode, ModeSet};
use crate::model::network::{EdgeId, IndexedEdge, VertexId};
use crate::plotter::plotter_error::PlotterError;

/// §4.2: for every edge and every candidate mode in `[1, 2^k - 2]`, retains
/// the mode iff it respects the edge's capacity and, for an edge with a goal
/// endpoint, puts that goal on the correct side of the cut. Edges with no
/// surviving mode are dropped outright.
pub fn enumerate_edge_modes(
    edges: &[IndexedEdge],
    demand: &dyn DemandFunction,
    goal_index: &HashMap<VertexId, usize>,
    k: usize,
    all_edge_modes: bool,
) -> Result<HashMap<EdgeId, ModeSet>, PlotterError> {
    let full = GoalSubset::full(k);
    let mut retained = HashMap::with_capacity(edges.len());

    for edge in edges {
        let start_goal = goal_index.get(&edge.start).copied();
        let finish_goal = goal_index.get(&edge.finish).copied();

        let mut modes = Vec::new();
        for raw in 1..full.0 {
            let subset = GoalSubset(raw);

            if let Some(g) = start_goal {
                if subset.contains(g) {
                    continue;
                }
            }
            if let Some(g) = finish_goal {
                if !subset.contains(g) {
                    continue;
                }
            }

            if !all_edge_modes {
                let (ingress, egress) = demand.get_pair(subset)?;
                if ingress.min() > edge.capacity.ingress.min() {
                    continue;
                }
                if egress.min() > edge.capacity.egress.min() {
                    continue;
                }
            }

            modes.push(Mode(subset));
        }

        if modes.is_empty() {
            log::trace!(
                "edge {} dropped: no viable modes under capacity/goal constraints",
                edge.id
            );
            continue;
        }
        log::trace!("edge {} retains {} viable modes", edge.id, modes.len());
        retained.insert(edge.id, ModeSet::from_sorted(modes));
    }

    Ok(retained)
}
