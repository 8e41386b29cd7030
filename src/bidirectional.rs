//! Bidirectional Dijkstra, pairwise shortest path between two specific
//! nodes (spec §4.5).
//!
//! Grounded on `petgraph::algo::bidirectional_dijkstra`'s forward/backward
//! frontier structure, extended to also return the path itself (petgraph's
//! version returns only the length) by tracking a predecessor on each
//! frontier the way [`crate::dijkstra`] does, and to detect the same
//! negative-weight anomaly [`crate::dijkstra`] does by splitting each
//! frontier's state into a finalized `dist` and a tentative `seen`, exactly
//! as that module's single frontier does.

use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ShortestPathError;
use crate::graph::{EdgeBundle, EdgeType, Graph};
use crate::measure::FloatMeasure;
use crate::scored::MinScored;

struct Frontier<N, D> {
    dist: HashMap<N, D>,
    seen: HashMap<N, D>,
    pred: HashMap<N, N>,
    heap: BinaryHeap<MinScored<D, (u64, N)>>,
}

impl<N, D> Frontier<N, D>
where
    N: Eq + Hash + Clone,
    D: FloatMeasure,
{
    fn new(start: &N) -> Self {
        let mut seen = HashMap::new();
        seen.insert(start.clone(), D::zero());
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(D::zero(), (0, start.clone())));
        Frontier {
            dist: HashMap::new(),
            seen,
            pred: HashMap::new(),
            heap,
        }
    }
}

/// What happened when a frontier was stepped once.
enum StepOutcome {
    /// The frontier's heap was already empty; nothing left to explore.
    Exhausted,
    /// A node was finalized and its out-edges relaxed.
    Continue,
    /// The node just finalized on this side is already finalized on the
    /// other side: the meeting condition (spec §4.5 line 136) is met.
    Meet,
}

/// Shortest path between `source` and `target`, searching outward from
/// both ends at once and stopping as soon as the two frontiers meet.
///
/// See spec §4.5. `finaldist`/`finalpath` start at `+infinity`/empty and
/// are only ever improved, never read before the first candidate midpoint
/// is found (the spec's open question on this point: the redesigned
/// behavior always initializes them up front rather than leaving them
/// unset until a meeting point is found, so the "no path" case is reached
/// by falling through the main loop rather than by a special early exit).
pub fn bidirectional_dijkstra<N, E, D, W, Ty>(
    graph: &Graph<N, E, Ty>,
    source: &N,
    target: &N,
    weight: W,
) -> Result<(D, Vec<N>), ShortestPathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    E: Clone,
    D: FloatMeasure,
    W: Fn(&N, &N, &EdgeBundle<E>) -> Option<D>,
    Ty: EdgeType,
{
    if !graph.contains_node(source) {
        return Err(ShortestPathError::NodeNotFound(source.clone()));
    }
    if !graph.contains_node(target) {
        return Err(ShortestPathError::NodeNotFound(target.clone()));
    }
    if source == target {
        return Ok((D::zero(), vec![source.clone()]));
    }

    log::debug!("bidirectional_dijkstra: {source:?} -> {target:?}");

    let mut fwd = Frontier::new(source);
    let mut bwd = Frontier::new(target);
    let mut seq: u64 = 1;

    let mut final_dist = D::infinite();
    let mut final_meet: Option<N> = None;

    // strictly alternate which frontier pops next (spec §4.5: `dir = 1 -
    // dir`), rather than always stepping whichever side's top is smaller.
    let mut forward_turn = true;
    loop {
        let outcome = if forward_turn {
            step(
                graph,
                &mut fwd,
                &bwd,
                &weight,
                true,
                &mut seq,
                &mut final_dist,
                &mut final_meet,
            )?
        } else {
            step(
                graph,
                &mut bwd,
                &fwd,
                &weight,
                false,
                &mut seq,
                &mut final_dist,
                &mut final_meet,
            )?
        };
        match outcome {
            StepOutcome::Meet | StepOutcome::Exhausted => break,
            StepOutcome::Continue => {}
        }
        forward_turn = !forward_turn;
    }

    let meet = match final_meet {
        Some(n) => n,
        None => return Err(ShortestPathError::NoPath),
    };

    let mut forward_half = vec![meet.clone()];
    let mut cur = meet.clone();
    while let Some(p) = fwd.pred.get(&cur) {
        forward_half.push(p.clone());
        cur = p.clone();
    }
    forward_half.reverse();

    let mut backward_half = Vec::new();
    let mut cur = meet;
    while let Some(p) = bwd.pred.get(&cur) {
        backward_half.push(p.clone());
        cur = p.clone();
    }

    forward_half.extend(backward_half);
    Ok((final_dist, forward_half))
}

/// Pop and finalize `this` frontier's next node, relaxing its outgoing
/// edges (forward frontier: graph successors; backward frontier: graph
/// predecessors, since it searches the reverse graph), and updating the
/// best-known meeting point against `other`'s tentative distances.
#[allow(clippy::too_many_arguments)]
fn step<N, E, D, W, Ty>(
    graph: &Graph<N, E, Ty>,
    this: &mut Frontier<N, D>,
    other: &Frontier<N, D>,
    weight: &W,
    forward: bool,
    seq: &mut u64,
    final_dist: &mut D,
    final_meet: &mut Option<N>,
) -> Result<StepOutcome, ShortestPathError<N>>
where
    N: Eq + Hash + Clone,
    E: Clone,
    D: FloatMeasure,
    W: Fn(&N, &N, &EdgeBundle<E>) -> Option<D>,
    Ty: EdgeType,
{
    // skip stale heap entries (a node pushed more than once before it was
    // finalized) until a fresh pop or an empty heap is found.
    let (d, v) = loop {
        let Some(MinScored(d, (_, v))) = this.heap.pop() else {
            return Ok(StepOutcome::Exhausted);
        };
        if this.dist.contains_key(&v) {
            continue;
        }
        break (d, v);
    };

    this.dist.insert(v.clone(), d);
    if other.dist.contains_key(&v) {
        return Ok(StepOutcome::Meet);
    }

    let neighbors: Vec<(N, EdgeBundle<E>)> = if forward {
        graph
            .succ(&v)
            .map(|(u, b)| (u.clone(), b.clone()))
            .collect()
    } else {
        graph
            .pred(&v)
            .map(|(u, b)| (u.clone(), b.clone()))
            .collect()
    };

    for (u, bundle) in neighbors {
        let edge_cost = if forward {
            weight(&v, &u, &bundle)
        } else {
            weight(&u, &v, &bundle)
        };
        let Some(edge_cost) = edge_cost else { continue };
        let candidate = d + edge_cost;

        if let Some(u_dist) = this.dist.get(&u) {
            if candidate < *u_dist {
                return Err(ShortestPathError::Contradictory(u.clone()));
            }
            continue;
        }

        let improves = match this.seen.get(&u) {
            Some(existing) => candidate < *existing,
            None => true,
        };
        if improves {
            this.seen.insert(u.clone(), candidate);
            this.pred.insert(u.clone(), v.clone());
            this.heap.push(MinScored(candidate, (*seq, u.clone())));
            *seq += 1;

            if let Some(other_seen) = other.seen.get(&u) {
                let total = candidate + *other_seen;
                if total < *final_dist {
                    *final_dist = total;
                    *final_meet = Some(u.clone());
                }
            }
        }
    }

    Ok(StepOutcome::Continue)
}
