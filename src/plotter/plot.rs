use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::model::demand::DemandFunction;
use crate::model::goal::MAX_GOALS;
use crate::model::network::{IndexedEdge, NetworkError, QualifiedEdge, VertexId};

use super::adjacency::build_adjacency;
use super::constraint::build_constraints;
use super::edge_mode_enumeration::enumerate_edge_modes;
use super::edge_ordering::order_edges;
use super::mixed_radix::MixedRadixEnumerator;
use super::plot_iter::PlotIter;
use super::plotter_config::PlotterConfig;
use super::plotter_error::PlotterError;
use super::router;

/// Enumerates the low-cost multi-point trees connecting `goal_order` over
/// `edges`, subject to `demand` and `config`.
///
/// Validates the caller's contract up front — `demand.degree()` matching
/// `goal_order.len()`, no duplicate goals, every goal an endpoint of some
/// edge, every cost finite and positive — and returns `Err` immediately on
/// violation. Past that point the returned [`PlotIter`] never fails: an
/// infeasible input (capacities too tight, goals disconnected) yields an
/// empty sequence, not an error.
pub fn plot<E: QualifiedEdge>(
    goal_order: &[VertexId],
    demand: Arc<dyn DemandFunction>,
    edges: &[E],
    config: &PlotterConfig,
) -> Result<PlotIter, PlotterError> {
    let k = goal_order.len();
    if k > MAX_GOALS {
        return Err(NetworkError::TooManyGoals(k, MAX_GOALS).into());
    }

    let mut seen = HashSet::with_capacity(k);
    for &g in goal_order {
        if !seen.insert(g) {
            return Err(NetworkError::DuplicateGoal(g).into());
        }
    }

    if demand.degree() != k {
        return Err(crate::model::demand::DemandError::DegreeMismatch(demand.degree(), k).into());
    }

    let mut indexed_edges = Vec::with_capacity(edges.len());
    let mut endpoints: HashSet<VertexId> = HashSet::with_capacity(edges.len() * 2);
    for (i, e) in edges.iter().enumerate() {
        let indexed = IndexedEdge::from_qualified(crate::model::network::EdgeId(i), e);
        if !indexed.cost.is_finite() {
            return Err(NetworkError::NonFiniteCost(indexed.id).into());
        }
        if indexed.cost.as_f64() <= 0.0 {
            return Err(NetworkError::NonPositiveCost(indexed.id).into());
        }
        endpoints.insert(indexed.start);
        endpoints.insert(indexed.finish);
        indexed_edges.push(indexed);
    }

    for &g in goal_order {
        if !endpoints.contains(&g) {
            return Err(NetworkError::GoalVertexUnused(g).into());
        }
    }

    log::debug!(
        "plot: {} goals, {} edges, bias_threshold={}",
        k,
        indexed_edges.len(),
        config.bias_threshold
    );

    if k <= 1 {
        // zero or one goal: trivially connected, no edge ever needs to be used.
        return Ok(PlotIter::Trivial { yielded: false });
    }

    let goal_index: HashMap<VertexId, usize> = goal_order
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();

    let mut modes = enumerate_edge_modes(
        &indexed_edges,
        demand.as_ref(),
        &goal_index,
        k,
        config.all_edge_modes,
    )?;

    if config.pruning_enabled() {
        modes = router::prune(&indexed_edges, goal_order, modes, config.bias_threshold);
    }

    let adjacency = build_adjacency(&indexed_edges, &modes);
    for &g in goal_order {
        if !adjacency.get(&g).is_some_and(|incident| !incident.is_empty()) {
            log::debug!("plot: goal {g} has no retained incident edge, infeasible");
            return Ok(PlotIter::Empty);
        }
    }

    let positions = order_edges(&indexed_edges, &modes, goal_order);
    let radices: Vec<usize> = positions.iter().map(|eid| modes[eid].radix()).collect();
    let constraints_by_anchor =
        build_constraints(&positions, &indexed_edges, &modes, goal_order, k);

    let mode_sets = Arc::new(modes);
    let enumerator = MixedRadixEnumerator::new(radices, constraints_by_anchor, mode_sets.clone());

    Ok(PlotIter::Search {
        enumerator,
        positions,
        mode_sets,
        demand,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::capacity::{BidiCapacity, Range};
    use crate::model::demand::FlatDemand;
    use crate::model::network::EdgeId;
    use crate::model::Tree;

    #[derive(Clone, Copy)]
    struct TestEdge {
        start: VertexId,
        finish: VertexId,
        cost: f64,
        capacity: BidiCapacity,
    }

    impl QualifiedEdge for TestEdge {
        fn start(&self) -> VertexId {
            self.start
        }
        fn finish(&self) -> VertexId {
            self.finish
        }
        fn cost(&self) -> f64 {
            self.cost
        }
        fn capacity(&self) -> BidiCapacity {
            self.capacity
        }
    }

    fn ample(start: usize, finish: usize, cost: f64) -> TestEdge {
        TestEdge {
            start: VertexId(start),
            finish: VertexId(finish),
            cost,
            capacity: BidiCapacity::new(Range::new(0.0, 100.0), Range::new(0.0, 100.0)),
        }
    }

    fn unit(start: usize, finish: usize) -> TestEdge {
        ample(start, finish, 1.0)
    }

    fn collect_trees(edges: &[TestEdge], goals: &[VertexId], demand: Arc<dyn DemandFunction>) -> Vec<Tree> {
        plot(goals, demand, edges, &PlotterConfig::default())
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    }

    /// scenario 1: A-B-C line, goals A and C, flat (1,1) demand.
    #[test]
    fn two_goal_line_yields_exactly_one_tree() {
        let edges = vec![unit(0, 1), unit(1, 2)];
        let goals = vec![VertexId(0), VertexId(2)];
        let demand = Arc::new(FlatDemand::new(2, Range::new(1.0, 1.0)));

        let trees = collect_trees(&edges, &goals, demand);
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].len(), 2);
    }

    /// scenario 2: two parallel edges between A and B of cost 1 and 2.
    #[test]
    fn two_goal_parallel_edges_yield_two_trees() {
        let edges = vec![ample(0, 1, 1.0), ample(0, 1, 2.0)];
        let goals = vec![VertexId(0), VertexId(1)];
        let demand = Arc::new(FlatDemand::new(2, Range::new(1.0, 1.0)));

        let trees = collect_trees(&edges, &goals, demand);
        assert_eq!(trees.len(), 2);
        assert!(trees.iter().all(|t| t.len() == 1));
    }

    /// scenario 3: A,B,C triangle, all three goals, flat demand, ample
    /// capacities. With cycles permitted, the full triangle is also valid,
    /// alongside each two-edge spanning tree.
    #[test]
    fn three_goal_triangle_includes_every_two_edge_spanning_tree() {
        let edges = vec![unit(0, 1), unit(1, 2), unit(0, 2)];
        let goals = vec![VertexId(0), VertexId(1), VertexId(2)];
        let demand = Arc::new(FlatDemand::new(3, Range::new(1.0, 1.0)));

        let trees = collect_trees(&edges, &goals, demand);
        let two_edge_trees = trees.iter().filter(|t| t.len() == 2).count();
        assert_eq!(two_edge_trees, 3);
    }

    /// scenario 4: one triangle edge has zero ingress capacity; it can
    /// never carry traffic for a positive-minimum demand and must never
    /// appear in a yielded tree.
    #[test]
    fn capacity_starved_edge_never_appears_in_a_tree() {
        let starved = TestEdge {
            start: VertexId(0),
            finish: VertexId(1),
            cost: 1.0,
            capacity: BidiCapacity::new(Range::new(0.0, 0.0), Range::new(0.0, 100.0)),
        };
        let edges = vec![starved, unit(1, 2), unit(0, 2)];
        let goals = vec![VertexId(0), VertexId(1), VertexId(2)];
        let demand = Arc::new(FlatDemand::new(3, Range::new(1.0, 1.0)));

        let trees = collect_trees(&edges, &goals, demand);
        assert!(!trees.is_empty());
        for tree in &trees {
            assert!(!tree.contains_key(&EdgeId(0)));
        }
    }

    /// scenario 6: two components, one goal in each; no tree can connect
    /// them, so the sequence must be empty.
    #[test]
    fn unreachable_goal_yields_no_trees() {
        let edges = vec![unit(0, 1), unit(2, 3)];
        let goals = vec![VertexId(0), VertexId(3)];
        let demand = Arc::new(FlatDemand::new(2, Range::new(1.0, 1.0)));

        let trees = collect_trees(&edges, &goals, demand);
        assert!(trees.is_empty());
    }

    #[test]
    fn degree_mismatch_is_a_contract_violation() {
        let edges = vec![unit(0, 1)];
        let goals = vec![VertexId(0), VertexId(1)];
        let demand = Arc::new(FlatDemand::new(3, Range::new(1.0, 1.0)));

        let result = plot(&goals, demand, &edges, &PlotterConfig::default());
        assert!(matches!(result, Err(PlotterError::InvalidInput(_))));
    }

    #[test]
    fn duplicate_goal_is_a_contract_violation() {
        let edges = vec![unit(0, 1)];
        let goals = vec![VertexId(0), VertexId(0)];
        let demand = Arc::new(FlatDemand::new(2, Range::new(1.0, 1.0)));

        let result = plot(&goals, demand, &edges, &PlotterConfig::default());
        assert!(matches!(result, Err(PlotterError::InvalidInput(_))));
    }

    #[test]
    fn goal_absent_from_every_edge_is_a_contract_violation() {
        let edges = vec![unit(0, 1)];
        let goals = vec![VertexId(0), VertexId(9)];
        let demand = Arc::new(FlatDemand::new(2, Range::new(1.0, 1.0)));

        let result = plot(&goals, demand, &edges, &PlotterConfig::default());
        assert!(matches!(result, Err(PlotterError::InvalidInput(_))));
    }

    #[test]
    fn single_goal_is_trivially_connected() {
        let edges = vec![unit(0, 1)];
        let goals = vec![VertexId(0)];
        let demand = Arc::new(FlatDemand::new(1, Range::new(1.0, 1.0)));

        let trees = collect_trees(&edges, &goals, demand);
        assert_eq!(trees, vec![Tree::new()]);
    }

    /// scenario 5 (loosely): a long chain alongside a strictly cheaper
    /// shortcut between the same two goals. Regardless of how aggressively
    /// the chain gets pruned, the shortcut alone already connects both
    /// goals, so it must survive pruning and appear in some yielded tree.
    #[test]
    fn cheap_shortcut_between_goals_always_survives_bias_pruning() {
        let edges = vec![
            unit(0, 2), // A - x1
            unit(2, 3), // x1 - x2
            unit(3, 1), // x2 - B
            ample(0, 1, 0.5), // shortcut A - B, much cheaper than the chain
        ];
        let goals = vec![VertexId(0), VertexId(1)];
        let demand = Arc::new(FlatDemand::new(2, Range::new(1.0, 1.0)));
        let config = PlotterConfig::default().with_bias_threshold(0.5).unwrap();

        let trees: Vec<Tree> = plot(&goals, demand, &edges, &config)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        assert!(!trees.is_empty());
        assert!(trees.iter().any(|t| t.contains_key(&EdgeId(3))));
    }
}
