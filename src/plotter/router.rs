use std::collections::{HashMap, HashSet, VecDeque};

use crate::model::goal::GoalSubset;
use crate::model::mode::ModeSet;
use crate::model::network::{EdgeId, IndexedEdge, VertexId, COST_EPSILON};

use super::adjacency::build_adjacency;

/// §4.3: the shortest-path bias pruner. Maintains, per (vertex, goal) pair, a
/// best-known distance, and per (edge, goal) pair, a pruning decision, and
/// iterates the two to a fixpoint: a distance change invalidates the edges
/// incident on it; an edge pruned of a mode invalidates the distances at its
/// two endpoints.
///
/// `bias_threshold` near 1.0 only prunes edges that are overwhelmingly
/// closer to a goal from one side than the other; callers needing every
/// capacity-valid mode kept should skip this stage entirely
/// (`PlotterConfig::pruning_enabled`).
pub fn prune(
    edges: &[IndexedEdge],
    goal_order: &[VertexId],
    mut modes: HashMap<EdgeId, ModeSet>,
    bias_threshold: f64,
) -> HashMap<EdgeId, ModeSet> {
    let k = goal_order.len();
    let adjacency = build_adjacency(edges, &modes);

    let mut vertex_index: HashMap<VertexId, usize> = HashMap::new();
    for &v in adjacency.keys() {
        let next = vertex_index.len();
        vertex_index.entry(v).or_insert(next);
    }
    for &g in goal_order {
        let next = vertex_index.len();
        vertex_index.entry(g).or_insert(next);
    }
    let n_vertices = vertex_index.len();

    let mut dist: Vec<Vec<Option<f64>>> = vec![vec![None; k]; n_vertices];
    for (gi, &g) in goal_order.iter().enumerate() {
        dist[vertex_index[&g]][gi] = Some(0.0);
    }

    let mut dist_queue: VecDeque<(VertexId, usize)> = VecDeque::new();
    let mut dist_queued: HashSet<(VertexId, usize)> = HashSet::new();
    let mut edge_queue: VecDeque<(EdgeId, usize)> = VecDeque::new();
    let mut edge_queued: HashSet<(EdgeId, usize)> = HashSet::new();

    for (gi, &g) in goal_order.iter().enumerate() {
        if let Some(incident) = adjacency.get(&g) {
            for &eid in incident {
                if let Some(other) = edges[eid.as_usize()].other(g) {
                    enqueue(other, gi, &mut dist_queue, &mut dist_queued);
                }
            }
        }
    }

    let mut iterations: u64 = 0;
    loop {
        while let Some((v, gi)) = dist_queue.pop_front() {
            dist_queued.remove(&(v, gi));
            iterations += 1;

            if v == goal_order[gi] {
                // a goal's distance to itself is the fixed root of the
                // lattice, not subject to relaxation from its neighbours.
                continue;
            }

            let vi = vertex_index[&v];

            let mut best: Option<f64> = None;
            if let Some(incident) = adjacency.get(&v) {
                for &eid in incident {
                    let Some(mode_set) = modes.get(&eid) else {
                        continue;
                    };
                    let edge = &edges[eid.as_usize()];
                    let Some(u) = edge.other(v) else {
                        continue;
                    };
                    let inward = edge.finish == v;
                    let union = mode_set.as_slice().iter().fold(GoalSubset::EMPTY, |acc, m| {
                        let external = if inward { m.to_set(k) } else { m.from_set() };
                        acc.union(external)
                    });
                    if !union.contains(gi) {
                        continue;
                    }
                    if let Some(du) = dist[vertex_index[&u]][gi] {
                        let candidate = du + edge.cost.as_f64();
                        best = Some(best.map_or(candidate, |b: f64| b.min(candidate)));
                    }
                }
            }

            let changed = match (dist[vi][gi], best) {
                (None, None) => false,
                (Some(_), None) | (None, Some(_)) => true,
                (Some(a), Some(b)) => (a - b).abs() > COST_EPSILON * a.abs().max(b.abs()).max(1.0),
            };
            if changed {
                dist[vi][gi] = best;
                if let Some(incident) = adjacency.get(&v) {
                    for &eid in incident {
                        let edge = &edges[eid.as_usize()];
                        if let Some(other) = edge.other(v) {
                            enqueue(other, gi, &mut dist_queue, &mut dist_queued);
                        }
                        if edge_queued.insert((eid, gi)) {
                            edge_queue.push_back((eid, gi));
                        }
                    }
                }
            }
        }

        let Some((eid, gi)) = edge_queue.pop_front() else {
            break;
        };
        edge_queued.remove(&(eid, gi));
        iterations += 1;

        let Some(mode_set) = modes.get_mut(&eid) else {
            continue;
        };
        let edge = &edges[eid.as_usize()];
        let d_start = dist[vertex_index[&edge.start]][gi];
        let d_finish = dist[vertex_index[&edge.finish]][gi];

        let removed = match (d_start, d_finish) {
            (None, None) => mode_set.retain(|_| false),
            (None, Some(_)) => mode_set.retain(|m| !m.from_set().contains(gi)),
            (Some(_), None) => mode_set.retain(|m| m.from_set().contains(gi)),
            (Some(ds), Some(df)) => {
                let u = (ds - df) / edge.cost.as_f64();
                if u > bias_threshold {
                    mode_set.retain(|m| m.from_set().contains(gi))
                } else if u < -bias_threshold {
                    mode_set.retain(|m| !m.from_set().contains(gi))
                } else {
                    false
                }
            }
        };

        if mode_set.is_empty() {
            modes.remove(&eid);
        }
        if removed {
            enqueue(edge.start, gi, &mut dist_queue, &mut dist_queued);
            enqueue(edge.finish, gi, &mut dist_queue, &mut dist_queued);
        }
    }

    log::debug!(
        "router: fixpoint reached after {} relaxations, {} edges retained",
        iterations,
        modes.len()
    );
    modes
}

fn enqueue<T: Eq + std::hash::Hash + Copy>(
    item: T,
    goal: usize,
    queue: &mut VecDeque<(T, usize)>,
    queued: &mut HashSet<(T, usize)>,
) {
    if queued.insert((item, goal)) {
        queue.push_back((item, goal));
    }
}
