//! The external graph collaborator the algorithmic cores are written against
//! (spec §3, §6).
//!
//! `Graph<N, E, Ty>` is an adjacency-map container keyed by node *value*,
//! generalized from `petgraph::graphmap::GraphMap` (undirected-only, no
//! parallel edges) in two directions: a `Directed`/`Undirected` marker type
//! the way `petgraph::graph::Graph<N, E, Ty>` carries one, and parallel
//! edges, since spec §3 requires multigraph bundles (a mapping from
//! parallel-edge key to attribute record) rather than a single edge value
//! per node pair.

use indexmap::IndexMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// A bundle of parallel edges between one ordered pair of nodes, keyed by an
/// arbitrary insertion-order key. A non-multigraph graph only ever inserts
/// key `0`.
pub type EdgeBundle<E> = IndexMap<usize, E>;

mod private {
    pub trait Sealed {}
}

/// Marker type for a directed graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Directed {}

/// Marker type for an undirected graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Undirected {}

impl private::Sealed for Directed {}
impl private::Sealed for Undirected {}

/// A graph's edge type determines whether it has directed edges or not.
pub trait EdgeType: private::Sealed {
    fn is_directed() -> bool;
}

impl EdgeType for Directed {
    #[inline]
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    #[inline]
    fn is_directed() -> bool {
        false
    }
}

/// An adjacency-map graph with arbitrary hashable node identities.
///
/// Node values double as map keys and are never inspected beyond `Eq +
/// Hash + Clone` (spec §3). Edges are stored as forward adjacency
/// (`succ`), and — for directed graphs only — a mirrored reverse adjacency
/// (`pred`) is maintained alongside it so the algorithmic cores can walk
/// incoming edges without scanning the whole graph. For undirected graphs
/// `pred` and `succ` are the same view, as spec §3 requires.
#[derive(Clone, Debug)]
pub struct Graph<N, E, Ty = Directed>
where
    N: Eq + Hash + Clone,
{
    multigraph: bool,
    succ: IndexMap<N, IndexMap<N, EdgeBundle<E>>>,
    pred: IndexMap<N, IndexMap<N, EdgeBundle<E>>>,
    ty: PhantomData<Ty>,
}

impl<N, E, Ty> Graph<N, E, Ty>
where
    N: Eq + Hash + Clone,
    E: Clone,
    Ty: EdgeType,
{
    /// Create an empty graph that does not allow parallel edges.
    pub fn new() -> Self {
        Graph {
            multigraph: false,
            succ: IndexMap::new(),
            pred: IndexMap::new(),
            ty: PhantomData,
        }
    }

    /// Create an empty multigraph, which allows parallel edges between the
    /// same ordered pair of nodes.
    pub fn new_multi() -> Self {
        Graph {
            multigraph: true,
            succ: IndexMap::new(),
            pred: IndexMap::new(),
            ty: PhantomData,
        }
    }

    /// Whether edges in this graph have a direction.
    #[inline]
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Whether this graph allows parallel edges between the same pair of
    /// nodes.
    #[inline]
    pub fn is_multigraph(&self) -> bool {
        self.multigraph
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.succ.len()
    }

    /// Whether `n` is a member of the graph.
    pub fn contains_node(&self, n: &N) -> bool {
        self.succ.contains_key(n)
    }

    /// Insert `n` into the graph if it is not already present.
    pub fn add_node(&mut self, n: N) {
        self.succ.entry(n.clone()).or_default();
        self.pred.entry(n).or_default();
    }

    /// Iterate over every node in the graph, in insertion order (this is
    /// the "fixed node-iteration order" spec §5 relies on for
    /// deterministic output).
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.succ.keys()
    }

    /// Add an edge `a -> b` (for undirected graphs, simply "between a and
    /// b") carrying data `weight`. Returns the parallel-edge key assigned
    /// to this edge. Inserts `a` and `b` if either is not already present.
    ///
    /// # Panics
    /// Panics if the edge already exists and this graph is not a
    /// multigraph (parallel edges require `new_multi`).
    pub fn add_edge(&mut self, a: N, b: N, weight: E) -> usize {
        self.add_node(a.clone());
        self.add_node(b.clone());

        let key = {
            let bundle = self.succ.get(&a).and_then(|m| m.get(&b));
            let next = bundle.map_or(0, |b| b.len());
            assert!(
                next == 0 || self.multigraph,
                "Graph::add_edge: parallel edge in a non-multigraph graph"
            );
            next
        };

        self.succ
            .get_mut(&a)
            .expect("node just inserted")
            .entry(b.clone())
            .or_default()
            .insert(key, weight.clone());

        if Ty::is_directed() {
            self.pred
                .get_mut(&b)
                .expect("node just inserted")
                .entry(a)
                .or_default()
                .insert(key, weight);
        } else if a != b {
            self.succ
                .get_mut(&b)
                .expect("node just inserted")
                .entry(a)
                .or_default()
                .insert(key, weight);
            // pred mirrors succ for undirected graphs; see `pred()` below.
        } else {
            // undirected self-loop: already recorded once above.
        }

        key
    }

    /// Forward adjacency of `v`: every `(u, bundle)` such that there is an
    /// edge `v -> u` (directed) or `v -- u` (undirected).
    pub fn succ(&self, v: &N) -> impl Iterator<Item = (&N, &EdgeBundle<E>)> + '_ {
        self.succ.get(v).into_iter().flat_map(|m| m.iter())
    }

    /// Reverse adjacency of `v`: every `(u, bundle)` such that there is an
    /// edge `u -> v`. For undirected graphs this coincides with `succ`.
    pub fn pred(&self, v: &N) -> impl Iterator<Item = (&N, &EdgeBundle<E>)> + '_ {
        let adjacency = if Ty::is_directed() { &self.pred } else { &self.succ };
        adjacency.get(v).into_iter().flat_map(|m| m.iter())
    }

    /// Every self-loop in the graph, as `(node, bundle)`.
    pub fn self_loops(&self) -> impl Iterator<Item = (&N, &EdgeBundle<E>)> + '_ {
        self.succ.iter().filter_map(|(n, adj)| adj.get(n).map(|b| (n, b)))
    }

    /// Remove `n` and every edge touching it. Used only by the
    /// negative-cycle probe (spec §6), which adds a sentinel node and must
    /// restore the graph on every exit path.
    pub fn remove_node(&mut self, n: &N) -> bool {
        if self.succ.shift_remove(n).is_none() {
            return false;
        }
        self.pred.shift_remove(n);
        for adj in self.succ.values_mut() {
            adj.shift_remove(n);
        }
        for adj in self.pred.values_mut() {
            adj.shift_remove(n);
        }
        true
    }
}

impl<N, E, Ty> Default for Graph<N, E, Ty>
where
    N: Eq + Hash + Clone,
    E: Clone,
    Ty: EdgeType,
{
    fn default() -> Self {
        Self::new()
    }
}
