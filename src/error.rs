//! The error taxonomy consumed by every core in this crate (spec §6, §7).
//!
//! Grounded on petgraph's own error types (`NegativeCycle`, `Cycle<N>` in
//! `src/algo/mod.rs`, `WouldCycle<E>` in `src/dag.rs`): small, `Clone +
//! Debug + PartialEq` structs/enums with a hand-written `Display` and
//! `std::error::Error` impl, no `thiserror`.

use std::error::Error;
use std::fmt;

/// Everything that can go wrong in a shortest-path computation.
///
/// The generic parameter `N` is the graph's node identifier type, so that a
/// `NodeNotFound` or `Contradictory` error can name the offending node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortestPathError<N> {
    /// A required source or target node is not a member of the graph.
    NodeNotFound(N),
    /// Search terminated without reaching a target a caller promised a path
    /// for.
    NoPath,
    /// A negative-weight cycle is reachable from a source.
    Unbounded,
    /// Dijkstra found a strictly shorter path to an already-finalized node;
    /// this can only happen with negative edge weights, which Dijkstra does
    /// not support.
    Contradictory(N),
    /// Johnson was invoked on a graph with no explicit edge weights.
    DomainError(&'static str),
    /// An empty source set was supplied where at least one source is
    /// required.
    ValueError(&'static str),
}

impl<N: fmt::Debug> fmt::Display for ShortestPathError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortestPathError::NodeNotFound(n) => write!(f, "node not found in graph: {n:?}"),
            ShortestPathError::NoPath => write!(f, "no path to target"),
            ShortestPathError::Unbounded => write!(f, "negative cost cycle detected"),
            ShortestPathError::Contradictory(n) => write!(
                f,
                "contradictory paths found at {n:?}: negative weights?"
            ),
            ShortestPathError::DomainError(msg) => write!(f, "domain error: {msg}"),
            ShortestPathError::ValueError(msg) => write!(f, "value error: {msg}"),
        }
    }
}

impl<N: fmt::Debug> Error for ShortestPathError<N> {}
