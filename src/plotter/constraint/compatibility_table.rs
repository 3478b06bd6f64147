use std::collections::HashMap;

use crate::model::mode::ModeSet;
use crate::model::network::EdgeId;

use super::edge_ref::EdgeRef;

/// Pre-computed (C1) compatibility lookup for one vertex's incident edges, per
/// the design notes of §9: for edges `i` and `j` and digit values `a`, `b`,
/// `compatible(i, a, j, b)` is a single bit saying whether edge `i` at digit
/// `a` and edge `j` at digit `b` have disjoint external sets. This turns the
/// inner loop of the C1 constraint into an array lookup instead of a
/// recomputation of both external sets on every check.
///
/// Space is `O(d * S^2)` for a vertex of degree `d` with largest mode-set
/// size `S`, per the design notes' budget.
#[derive(Debug)]
pub struct CompatibilityTable {
    radices: Vec<usize>,
    // tables[i][j] is `compatible(i, a, j, b)` flattened as `a * radices[j] + b`.
    // `tables[i][i]` is never read.
    tables: Vec<Vec<Vec<bool>>>,
}

impl CompatibilityTable {
    pub fn build(edges: &[EdgeRef], mode_sets: &HashMap<EdgeId, ModeSet>, k: usize) -> CompatibilityTable {
        let n = edges.len();
        let radices: Vec<usize> = edges
            .iter()
            .map(|e| mode_sets[&e.edge_id].radix())
            .collect();

        let mut tables = vec![vec![Vec::new(); n]; n];
        for i in 0..n {
            let modes_i = &mode_sets[&edges[i].edge_id];
            for j in 0..n {
                if i == j {
                    continue;
                }
                let modes_j = &mode_sets[&edges[j].edge_id];
                let (ri, rj) = (radices[i], radices[j]);
                let mut bits = vec![false; ri * rj];
                for a in 0..ri {
                    let ext_a = edges[i].external_set(a, modes_i, k);
                    for b in 0..rj {
                        let ext_b = edges[j].external_set(b, modes_j, k);
                        bits[a * rj + b] = ext_a.is_disjoint(ext_b);
                    }
                }
                tables[i][j] = bits;
            }
        }

        CompatibilityTable { radices, tables }
    }

    pub fn compatible(&self, i: usize, digit_i: usize, j: usize, digit_j: usize) -> bool {
        let rj = self.radices[j];
        self.tables[i][j][digit_i * rj + digit_j]
    }
}
