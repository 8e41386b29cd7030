//! Johnson's algorithm: all-pairs shortest paths via Bellman–Ford
//! reweighting followed by per-source Dijkstra (spec §4.6).
//!
//! Grounded on `petgraph::algo::johnson`'s two-stage structure (a single
//! Bellman–Ford pass from a virtual node touching every real node, then one
//! Dijkstra run per source against the reweighted graph), generalized to
//! this crate's multi-source [`crate::bellman_ford::bellman_ford`] and
//! [`crate::dijkstra::dijkstra`] cores and extended with the "must be
//! weighted" precondition networkx's `johnson` enforces: a graph with no
//! explicit edge weights has nothing for Johnson's reweighting step to
//! correct for, so it is rejected rather than silently treated as unit
//! weight.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::bellman_ford::{bellman_ford, BellmanFordOptions};
use crate::dijkstra::{dijkstra, DijkstraOptions};
use crate::error::ShortestPathError;
use crate::graph::{EdgeBundle, EdgeType, Graph};
use crate::measure::FloatMeasure;

/// All-pairs shortest paths, keyed `source -> (target -> distance)`.
///
/// See spec §4.6. `weight` must resolve to `Some` on at least one edge (an
/// all-default-weight graph is rejected with
/// [`ShortestPathError::DomainError`], matching networkx's `johnson`, which
/// only makes sense once there is a real weight to correct the Dijkstra
/// phase for).
pub fn johnson<N, E, D, W, Ty>(
    graph: &Graph<N, E, Ty>,
    weight: W,
) -> Result<HashMap<N, HashMap<N, D>>, ShortestPathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    E: Clone,
    D: FloatMeasure,
    W: Fn(&N, &N, &EdgeBundle<E>) -> Option<D> + Clone,
    Ty: EdgeType,
{
    if graph.node_count() == 0 {
        return Ok(HashMap::new());
    }

    let has_any_weighted_edge = graph
        .nodes()
        .flat_map(|n| graph.succ(n))
        .any(|(_, bundle)| bundle.values().next().is_some());
    if !has_any_weighted_edge {
        return Err(ShortestPathError::DomainError(
            "johnson requires a graph with at least one edge to reweight",
        ));
    }

    log::debug!(
        "johnson: all-pairs shortest paths over {} node(s)",
        graph.node_count()
    );

    // Bellman-Ford from every node at once (equivalent to adding a virtual
    // source connected to everything with zero-weight edges) gives each
    // node a potential h(v) such that w'(u, v) = w(u, v) + h(u) - h(v) is
    // non-negative whenever the graph has no negative cycle.
    let all_nodes: Vec<N> = graph.nodes().cloned().collect();
    let bf = bellman_ford(graph, all_nodes, weight.clone(), BellmanFordOptions {
        want_pred: false,
        want_paths: false,
    })?;
    let potential = bf.dist;

    let mut result = HashMap::new();
    for source in graph.nodes() {
        let w = weight.clone();
        let h = potential.clone();
        let source_h = *h.get(source).unwrap_or(&D::zero());
        let reweighted = move |u: &N, v: &N, bundle: &EdgeBundle<E>| -> Option<D> {
            let raw = w(u, v, bundle)?;
            let hu = *h.get(u).unwrap_or(&D::zero());
            let hv = *h.get(v).unwrap_or(&D::zero());
            Some(raw + hu - hv)
        };

        let out = dijkstra(graph, [source.clone()], reweighted, DijkstraOptions::default())?;
        let mut dist = HashMap::new();
        for (target, d) in out.dist {
            // undo the reweighting: real_dist(s, t) = d'(s, t) - h(s) + h(t)
            let ht = *potential.get(&target).unwrap_or(&D::zero());
            dist.insert(target, d - source_h + ht);
        }
        result.insert(source.clone(), dist);
    }

    Ok(result)
}
