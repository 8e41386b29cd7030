//! Dijkstra multi-source core (spec §4.2).
//!
//! Grounded on `petgraph::algo::dijkstra`'s `HashMap::entry` relaxation
//! discipline and its `MinScored`-over-`BinaryHeap` priority queue, extended
//! with predecessor-list maintenance, canonical-path recording, cutoff, a
//! single halting target, and a `node_weight` per-node surcharge — none of
//! which petgraph's single-source `dijkstra` needs, but all of which spec
//! §4.2 requires.

use std::collections::hash_map::Entry;
use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ShortestPathError;
use crate::graph::{EdgeBundle, EdgeType, Graph};
use crate::measure::Measure;
use crate::scored::MinScored;

/// Per-call knobs for [`dijkstra`] (spec §4.2's `pred?`, `paths?`, `cutoff?`,
/// `target?`, `node_weight?`).
///
/// Rather than caller-owned `&mut` out-parameters (spec §9's design note),
/// this port has the core own its maps and hand them back inside
/// [`DijkstraOutput`]; `want_pred`/`want_paths` are the flags that decide
/// whether those maps get populated at all.
pub struct DijkstraOptions<'a, N, D> {
    pub want_pred: bool,
    pub want_paths: bool,
    pub cutoff: Option<D>,
    pub target: Option<&'a N>,
    pub node_weight: Option<&'a HashMap<N, D>>,
}

impl<N, D> Default for DijkstraOptions<'_, N, D> {
    fn default() -> Self {
        DijkstraOptions {
            want_pred: false,
            want_paths: false,
            cutoff: None,
            target: None,
            node_weight: None,
        }
    }
}

/// The result of a [`dijkstra`] call.
#[derive(Debug, Default)]
pub struct DijkstraOutput<N, D> {
    pub dist: HashMap<N, D>,
    pub pred: Option<HashMap<N, Vec<N>>>,
    pub paths: Option<HashMap<N, Vec<N>>>,
}

/// Dijkstra's shortest path algorithm from a non-empty set of sources.
///
/// See spec §4.2 for the full relaxation discipline. Edge weights must be
/// non-negative; a strictly shorter path discovered to an already-finalized
/// node is reported as [`ShortestPathError::Contradictory`] rather than
/// silently accepted, since that can only happen with negative weights.
pub fn dijkstra<N, E, D, W, Ty>(
    graph: &Graph<N, E, Ty>,
    sources: impl IntoIterator<Item = N>,
    weight: W,
    opts: DijkstraOptions<'_, N, D>,
) -> Result<DijkstraOutput<N, D>, ShortestPathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    E: Clone,
    D: Measure + Copy,
    W: Fn(&N, &N, &EdgeBundle<E>) -> Option<D>,
    Ty: EdgeType,
{
    let sources: Vec<N> = sources.into_iter().collect();
    if sources.is_empty() {
        return Err(ShortestPathError::ValueError("sources must be non-empty"));
    }
    for s in &sources {
        if !graph.contains_node(s) {
            return Err(ShortestPathError::NodeNotFound(s.clone()));
        }
    }

    log::debug!("dijkstra: {} source(s)", sources.len());

    let mut dist: HashMap<N, D> = HashMap::new();
    let mut seen: HashMap<N, D> = HashMap::new();
    let mut pred: HashMap<N, Vec<N>> = HashMap::new();
    let mut paths: HashMap<N, Vec<N>> = HashMap::new();

    let mut heap = BinaryHeap::new();
    let mut seq: u64 = 0;

    for s in &sources {
        let init = opts
            .node_weight
            .and_then(|nw| nw.get(s))
            .copied()
            .unwrap_or_default();
        seen.insert(s.clone(), init);
        heap.push(MinScored(init, (seq, s.clone())));
        seq += 1;
        if opts.want_paths {
            paths.insert(s.clone(), vec![s.clone()]);
        }
        if opts.want_pred {
            pred.entry(s.clone()).or_default();
        }
    }

    while let Some(MinScored(d, (_, v))) = heap.pop() {
        if dist.contains_key(&v) {
            continue;
        }
        dist.insert(v.clone(), d);
        if opts.target == Some(&v) {
            break;
        }

        for (u, bundle) in graph.succ(&v) {
            let edge_cost = match weight(&v, u, bundle) {
                Some(c) => c,
                None => continue,
            };
            let node_surcharge = opts
                .node_weight
                .and_then(|nw| nw.get(u))
                .copied()
                .unwrap_or_default();
            let new_dist = d.clone() + edge_cost + node_surcharge;

            if let Some(cutoff) = &opts.cutoff {
                if new_dist > *cutoff {
                    continue;
                }
            }

            if let Some(u_dist) = dist.get(u) {
                if new_dist < *u_dist {
                    return Err(ShortestPathError::Contradictory(u.clone()));
                } else if new_dist == *u_dist && opts.want_pred {
                    pred.entry(u.clone()).or_default().push(v.clone());
                }
                continue;
            }

            match seen.entry(u.clone()) {
                Entry::Vacant(e) => {
                    e.insert(new_dist);
                    heap.push(MinScored(new_dist, (seq, u.clone())));
                    seq += 1;
                    if opts.want_paths {
                        let mut p = paths.get(&v).cloned().unwrap_or_default();
                        p.push(u.clone());
                        paths.insert(u.clone(), p);
                    }
                    if opts.want_pred {
                        pred.insert(u.clone(), vec![v.clone()]);
                    }
                }
                Entry::Occupied(mut e) => {
                    if new_dist < *e.get() {
                        *e.get_mut() = new_dist;
                        heap.push(MinScored(new_dist, (seq, u.clone())));
                        seq += 1;
                        if opts.want_paths {
                            let mut p = paths.get(&v).cloned().unwrap_or_default();
                            p.push(u.clone());
                            paths.insert(u.clone(), p);
                        }
                        if opts.want_pred {
                            pred.insert(u.clone(), vec![v.clone()]);
                        }
                    } else if new_dist == *e.get() && opts.want_pred {
                        pred.entry(u.clone()).or_default().push(v.clone());
                    }
                }
            }
        }
    }

    Ok(DijkstraOutput {
        dist,
        pred: opts.want_pred.then_some(pred),
        paths: opts.want_paths.then_some(paths),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Directed, Undirected};
    use crate::weight::resolve_by_key;

    fn path_graph() -> Graph<i32, f64, Undirected> {
        let mut g = Graph::new();
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
            g.add_edge(a, b, 1.0);
        }
        g
    }

    #[test]
    fn scenario_a_single_source_path_graph() {
        let g = path_graph();
        let w = resolve_by_key::<i32, f64>("weight");
        let out = dijkstra(
            &g,
            [0],
            |u, v, b| w(u, v, b),
            DijkstraOptions {
                want_paths: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(out.dist[&4], 4.0);
        assert_eq!(out.paths.unwrap()[&4], vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn scenario_b_multi_source_collapse() {
        let g = path_graph();
        let w = resolve_by_key::<i32, f64>("weight");
        let out = dijkstra(
            &g,
            [0, 4],
            |u, v, b| w(u, v, b),
            DijkstraOptions {
                want_paths: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(out.dist[&2], 2.0);
        let paths = out.paths.unwrap();
        assert_eq!(paths[&1], vec![0, 1]);
        assert_eq!(paths[&3], vec![4, 3]);
    }

    #[test]
    fn cutoff_prunes_far_nodes() {
        let g = path_graph();
        let w = resolve_by_key::<i32, f64>("weight");
        let out = dijkstra(
            &g,
            [0],
            |u, v, b| w(u, v, b),
            DijkstraOptions {
                cutoff: Some(2.0),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(out.dist.contains_key(&2));
        assert!(!out.dist.contains_key(&3));
    }

    #[test]
    fn target_halts_search_early() {
        let g = path_graph();
        let w = resolve_by_key::<i32, f64>("weight");
        let out = dijkstra(
            &g,
            [0],
            |u, v, b| w(u, v, b),
            DijkstraOptions {
                target: Some(&2),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(out.dist[&2], 2.0);
        assert!(!out.dist.contains_key(&4));
    }

    #[test]
    fn missing_source_is_node_not_found() {
        let g = path_graph();
        let w = resolve_by_key::<i32, f64>("weight");
        let err = dijkstra(&g, [99], |u, v, b| w(u, v, b), DijkstraOptions::default());
        assert_eq!(err.unwrap_err(), ShortestPathError::NodeNotFound(99));
    }

    #[test]
    fn empty_sources_is_value_error() {
        let g = path_graph();
        let w = resolve_by_key::<i32, f64>("weight");
        let err = dijkstra(
            &g,
            std::iter::empty(),
            |u, v, b| w(u, v, b),
            DijkstraOptions::default(),
        );
        assert!(matches!(err, Err(ShortestPathError::ValueError(_))));
    }

    #[test]
    fn predecessor_list_captures_ties() {
        // a diamond: 0 -> 1 -> 3, 0 -> 2 -> 3, all weight 1, two
        // co-optimal paths to 3.
        let mut g: Graph<i32, f64, Directed> = Graph::new();
        g.add_edge(0, 1, 1.0);
        g.add_edge(0, 2, 1.0);
        g.add_edge(1, 3, 1.0);
        g.add_edge(2, 3, 1.0);
        let w = resolve_by_key::<i32, f64>("weight");
        let out = dijkstra(
            &g,
            [0],
            |u, v, b| w(u, v, b),
            DijkstraOptions {
                want_pred: true,
                ..Default::default()
            },
        )
        .unwrap();
        let pred = out.pred.unwrap();
        let mut via_three = pred[&3].clone();
        via_three.sort();
        assert_eq!(via_three, vec![1, 2]);
    }
}
