//! Negative-cycle probe (spec §4.7): is a negative-weight cycle reachable
//! from anywhere in the graph?
//!
//! Grounded on networkx's `negative_edge_cycle` (`original_source/networkx/
//! algorithms/shortest_paths/weighted.py`): add a sentinel node with a
//! zero-weight edge to every real node, run Bellman–Ford from it alone
//! (so every node is reachable in one hop and the probe sees the whole
//! graph), and always remove the sentinel again before returning — on the
//! `Unbounded` path as much as the success path, since this function only
//! ever borrows the graph's shape, never owns a mutation the caller asked
//! for.

use std::fmt::Debug;
use std::hash::Hash;

use crate::bellman_ford::{bellman_ford, BellmanFordOptions};
use crate::error::ShortestPathError;
use crate::graph::{EdgeBundle, EdgeType, Graph};
use crate::measure::FloatMeasure;

/// Whether a negative-weight cycle is reachable from any node in the
/// graph.
///
/// See spec §4.7. `graph` is taken by `&mut` only for the duration of the
/// call: a sentinel node is inserted and always removed again before this
/// function returns, regardless of which path it returns through.
pub fn negative_edge_cycle<N, E, D, W, Ty>(graph: &mut Graph<N, E, Ty>, weight: W) -> bool
where
    N: Eq + Hash + Clone + Debug + SentinelNode,
    E: Clone + Default,
    D: FloatMeasure,
    W: Fn(&N, &N, &EdgeBundle<E>) -> Option<D>,
    Ty: EdgeType,
{
    if graph.node_count() == 0 {
        return false;
    }

    let sentinel = N::sentinel();
    let real_nodes: Vec<N> = graph.nodes().cloned().collect();
    for n in &real_nodes {
        graph.add_edge(sentinel.clone(), n.clone(), E::default());
    }

    log::debug!("negative_edge_cycle: probing via sentinel node");

    let weight_with_sentinel = |u: &N, v: &N, bundle: &EdgeBundle<E>| -> Option<D> {
        if *u == sentinel {
            Some(D::zero())
        } else {
            weight(u, v, bundle)
        }
    };

    let result = bellman_ford(
        graph,
        [sentinel.clone()],
        weight_with_sentinel,
        BellmanFordOptions {
            want_pred: false,
            want_paths: false,
        },
    );

    graph.remove_node(&sentinel);

    matches!(result, Err(ShortestPathError::Unbounded))
}

/// A node type that can mint a value guaranteed distinct from any node a
/// caller would plausibly add to their own graph, for use as
/// [`negative_edge_cycle`]'s temporary sentinel.
///
/// Implemented for the integer and string node identities spec §3 calls
/// out as the common case; a caller with a richer node type can implement
/// this trait themselves.
pub trait SentinelNode {
    fn sentinel() -> Self;
}

macro_rules! impl_sentinel_for_signed {
    ($($t:ty),*) => {
        $(impl SentinelNode for $t {
            fn sentinel() -> Self {
                <$t>::MIN
            }
        })*
    };
}

impl_sentinel_for_signed!(i8, i16, i32, i64, isize);

impl SentinelNode for String {
    fn sentinel() -> Self {
        "\u{0}__shortest_paths_sentinel__\u{0}".to_string()
    }
}
