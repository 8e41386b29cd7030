//! Weighted shortest-path algorithms over graphs with arbitrary hashable
//! node identities: single-source and multi-source Dijkstra, Bellman–Ford
//! (via the SPFA worklist discipline), Goldberg–Radzik, bidirectional
//! Dijkstra, Johnson's all-pairs algorithm, and a standalone negative-cycle
//! probe.
//!
//! All of the algorithmic cores are generic over:
//! - a node identity `N: Eq + Hash + Clone`, never required to implement
//!   `Ord`;
//! - a distance/cost type `D` bounded by [`measure::Measure`] or the
//!   stronger [`measure::FloatMeasure`] where an explicit `zero`/`infinite`
//!   sentinel is needed;
//! - a weight resolver, a plain `Fn(&N, &N, &EdgeBundle<E>) -> Option<D>`
//!   closure — see [`weight`] for the common "attribute key" and
//!   "min-over-parallel-edges" resolvers.

mod bellman_ford;
mod bidirectional;
mod dijkstra;
mod error;
mod goldberg_radzik;
mod graph;
mod johnson;
mod measure;
mod negative_cycle;
mod paths;
mod scored;
mod weight;

pub use bellman_ford::{bellman_ford, BellmanFordOptions, BellmanFordOutput};
pub use bidirectional::bidirectional_dijkstra;
pub use dijkstra::{dijkstra, DijkstraOptions, DijkstraOutput};
pub use error::ShortestPathError;
pub use goldberg_radzik::{goldberg_radzik, GoldbergRadzikOutput};
pub use graph::{Directed, EdgeBundle, EdgeType, Graph, Undirected};
pub use johnson::johnson;
pub use measure::{FloatMeasure, Measure};
pub use negative_cycle::{negative_edge_cycle, SentinelNode};
pub use paths::build_path;
pub use scored::MinScored;
pub use weight::{resolve_by_key, resolve_by_key_multi, Attrs, EdgeAttrs};
