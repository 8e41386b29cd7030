//! Bellman–Ford via the SPFA (shortest path faster algorithm) queue
//! discipline, with the Pfeifer "recent update" negative-cycle heuristic
//! (spec §4.3).
//!
//! Grounded on networkx's `_bellman_ford` (`original_source/networkx/
//! algorithms/shortest_paths/weighted.py`): a FIFO worklist of "dirty" nodes,
//! an `in_queue` membership set to avoid duplicate enqueues, a `count` map
//! tracking how many times each node has been dequeued (a hard backstop: if
//! it ever exceeds the node count, a cycle must exist even if the heuristic
//! below missed it), a "smart queue" skip that defers relaxing a popped
//! node while any of its own predecessors are still waiting in the queue,
//! and — the fast-path cycle detector — a `recent_update` map recording,
//! for each node, the single edge pair `(u, v)` that last tightened it,
//! inherited unchanged across a run of relaxations along the same edge; if
//! a relaxation would revisit either endpoint of the relaxing node's own
//! pair, a negative cycle runs through it.

use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ShortestPathError;
use crate::graph::{EdgeBundle, EdgeType, Graph};
use crate::measure::FloatMeasure;
use crate::paths::build_path;

/// Per-call knobs for [`bellman_ford`] (spec §4.3's `pred?`, `paths?`).
pub struct BellmanFordOptions {
    pub want_pred: bool,
    pub want_paths: bool,
}

impl Default for BellmanFordOptions {
    fn default() -> Self {
        BellmanFordOptions {
            want_pred: false,
            want_paths: true,
        }
    }
}

/// The result of a [`bellman_ford`] call.
#[derive(Debug, Default)]
pub struct BellmanFordOutput<N, D> {
    pub dist: HashMap<N, D>,
    pub pred: HashMap<N, Vec<N>>,
    pub paths: Option<HashMap<N, Vec<N>>>,
}

/// Single-pass relaxation bookkeeping for one node, as the SPFA core walks
/// the worklist.
///
/// `pred` is the full, possibly co-optimal, predecessor list used both for
/// the final output and for the smart-queue skip (a popped node whose own
/// predecessor list still has a member in the queue is deferred). `pred_edge`
/// is the single latest edge that tightened a node, used only to decide
/// whether `recent_update` should inherit or reset. `recent_update[v]` is the
/// `(u, v)` pair of the edge that last tightened `v`; relaxing `u -> v` while
/// `v` already appears in `u`'s own pair means that pair loops back on
/// itself through a negative-weight edge.
struct RelaxState<N> {
    pred: HashMap<N, Vec<N>>,
    pred_edge: HashMap<N, N>,
    recent_update: HashMap<N, (N, N)>,
}

/// Bellman–Ford shortest paths from a non-empty set of sources, tolerant of
/// negative edge weights, reporting [`ShortestPathError::Unbounded`] if a
/// negative-weight cycle is reachable from any source.
///
/// See spec §4.3. Self-loops with a negative weight are rejected up front
/// (a trivial one-node negative cycle), matching networkx.
pub fn bellman_ford<N, E, D, W, Ty>(
    graph: &Graph<N, E, Ty>,
    sources: impl IntoIterator<Item = N>,
    weight: W,
    opts: BellmanFordOptions,
) -> Result<BellmanFordOutput<N, D>, ShortestPathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    E: Clone,
    D: FloatMeasure,
    W: Fn(&N, &N, &EdgeBundle<E>) -> Option<D>,
    Ty: EdgeType,
{
    let sources: Vec<N> = sources.into_iter().collect();
    if sources.is_empty() {
        return Err(ShortestPathError::ValueError("sources must be non-empty"));
    }
    let source_set: HashSet<N> = sources.iter().cloned().collect();
    for s in &sources {
        if !graph.contains_node(s) {
            return Err(ShortestPathError::NodeNotFound(s.clone()));
        }
        for (u, bundle) in graph.succ(s) {
            if u == s {
                if let Some(c) = weight(s, u, bundle) {
                    if c < D::zero() {
                        log::debug!("bellman_ford: negative self-loop at source");
                        return Err(ShortestPathError::Unbounded);
                    }
                }
            }
        }
    }

    log::debug!("bellman_ford: {} source(s)", sources.len());

    let mut dist: HashMap<N, D> = sources.iter().map(|s| (s.clone(), D::zero())).collect();
    let mut state = RelaxState {
        pred: sources.iter().map(|s| (s.clone(), Vec::new())).collect(),
        pred_edge: HashMap::new(),
        recent_update: HashMap::new(),
    };

    let mut queue: VecDeque<N> = sources.iter().cloned().collect();
    let mut in_queue: HashSet<N> = source_set.clone();
    let mut count: HashMap<N, usize> = HashMap::new();
    let n = graph.node_count();

    while let Some(u) = queue.pop_front() {
        in_queue.remove(&u);

        // smart queue: if any of u's own predecessors is still waiting to
        // be dequeued, u will be relaxed again once that predecessor
        // settles, so skip this round's relaxation.
        let predecessor_still_queued = state
            .pred
            .get(&u)
            .is_some_and(|preds| preds.iter().any(|p| in_queue.contains(p)));
        if predecessor_still_queued {
            continue;
        }

        // a node can only be relaxed through more than n - 1 times if a
        // negative cycle passes through it.
        let c = count.entry(u.clone()).or_insert(0);
        *c += 1;
        if *c > n {
            return Err(ShortestPathError::Unbounded);
        }

        let d_u = *dist.get(&u).expect("queued node always has a distance");
        for (v, bundle) in graph.succ(&u) {
            let edge_cost = match weight(&u, v, bundle) {
                Some(c) => c,
                None => continue,
            };
            let candidate = d_u + edge_cost;
            let old = dist.get(v).copied();
            let improves = match old {
                Some(d_v) => candidate < d_v,
                None => true,
            };

            if improves {
                if state
                    .recent_update
                    .get(&u)
                    .is_some_and(|(a, b)| a == v || b == v)
                {
                    log::debug!("bellman_ford: negative cycle detected through relaxation chain");
                    return Err(ShortestPathError::Unbounded);
                }

                let inherited = if state.pred_edge.get(v) == Some(&u) {
                    state
                        .recent_update
                        .get(&u)
                        .cloned()
                        .unwrap_or_else(|| (u.clone(), v.clone()))
                } else {
                    (u.clone(), v.clone())
                };
                state.recent_update.insert(v.clone(), inherited);

                dist.insert(v.clone(), candidate);
                state.pred.insert(v.clone(), vec![u.clone()]);
                state.pred_edge.insert(v.clone(), u.clone());

                if !in_queue.contains(v) {
                    queue.push_back(v.clone());
                    in_queue.insert(v.clone());
                }
            } else if let Some(d_v) = old {
                if candidate == d_v {
                    state.pred.entry(v.clone()).or_default().push(u.clone());
                }
            }
        }
    }

    let pred = state.pred;

    let paths = if opts.want_paths {
        let mut paths = HashMap::new();
        for v in dist.keys() {
            if let Some(p) = build_path(&source_set, v, &pred) {
                paths.insert(v.clone(), p);
            }
        }
        Some(paths)
    } else {
        None
    };

    Ok(BellmanFordOutput {
        dist,
        pred: if opts.want_pred { pred } else { HashMap::new() },
        paths,
    })
}
