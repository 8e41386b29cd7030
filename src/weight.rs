//! Weight resolver (spec §4.1): normalizes a user-supplied weight specifier
//! into a uniform `(u, v, edge_data) -> Option<f64>` callable.

use crate::graph::EdgeBundle;

/// An edge-data record that can be asked for a named numeric attribute.
///
/// `f64` itself implements this (the edge value *is* the weight); the
/// `attr` map type below models the networkx-style "bag of named
/// attributes" a [`resolve_by_key`]/[`resolve_by_key_multi`] lookup walks.
pub trait EdgeAttrs {
    fn attr(&self, key: &str) -> Option<f64>;
}

impl EdgeAttrs for f64 {
    fn attr(&self, _key: &str) -> Option<f64> {
        Some(*self)
    }
}

/// A small ordered bag of named numeric attributes, for graphs whose edge
/// data carries more than a single weight (e.g. `{"weight": 3.0, "capacity":
/// 10.0}`).
pub type Attrs = indexmap::IndexMap<&'static str, f64>;

impl EdgeAttrs for Attrs {
    fn attr(&self, key: &str) -> Option<f64> {
        self.get(key).copied()
    }
}

/// Resolve the non-multigraph case of spec §4.1: `(u, v, d) -> d.get(key, 1)`.
///
/// The returned closure never returns `None` — a missing attribute falls
/// back to weight `1`, matching the spec. `None` is reserved for
/// caller-supplied weight callables that want to hide an edge.
pub fn resolve_by_key<N, E>(key: &'static str) -> impl Fn(&N, &N, &E) -> Option<f64> + Clone
where
    E: EdgeAttrs,
{
    move |_u, _v, e| Some(e.attr(key).unwrap_or(1.0))
}

/// Resolve the multigraph case of spec §4.1: `(u, v, bundle) -> min(attr.get(key,
/// 1) for attr in bundle)`.
///
/// Behavior is unspecified (and this implementation returns `1.0`, never
/// panicking) if `bundle` is empty; callers are expected to never pass an
/// empty bundle, per spec.
pub fn resolve_by_key_multi<N, E>(
    key: &'static str,
) -> impl Fn(&N, &N, &EdgeBundle<E>) -> Option<f64> + Clone
where
    E: EdgeAttrs,
{
    move |_u, _v, bundle| {
        let min = bundle
            .values()
            .map(|e| e.attr(key).unwrap_or(1.0))
            .fold(f64::INFINITY, f64::min);
        Some(if min.is_finite() { min } else { 1.0 })
    }
}
