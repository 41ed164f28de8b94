//! Minimum spanning tree of the complete Euclidean graph, via Kruskal.
//!
//! The complete graph on `n` points has `n(n-1)/2` edges. Kruskal's algorithm
//! sorts them by cost and greedily keeps every edge that joins two different
//! components of a [`UnionFind`], stopping once `n - 1` edges are kept.
//!
//! # Complexity
//!
//! O(n² log n) time for the sort, O(n²) space for the edge list. Union-find
//! operations are amortized near-constant.

use std::cmp::Ordering;

use tracing::debug;

use super::util::UnionFind;
use crate::geometry::Point;

/// Weighted undirected edge between points `u < v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Lower endpoint index.
    pub u: usize,
    /// Higher endpoint index.
    pub v: usize,
    /// Euclidean distance between the endpoints.
    pub cost: f64,
}

impl Edge {
    /// Edge between `a` and `b`, stored with the lower index first.
    pub fn new(a: usize, b: usize, cost: f64) -> Self {
        let (u, v) = if a <= b { (a, b) } else { (b, a) };
        Self { u, v, cost }
    }

    /// Ascending by cost, then by `(u, v)`.
    pub fn ascending(a: &Edge, b: &Edge) -> Ordering {
        a.cost
            .total_cmp(&b.cost)
            .then_with(|| (a.u, a.v).cmp(&(b.u, b.v)))
    }

    /// Descending by cost, then by `(u, v)` ascending.
    pub fn descending(a: &Edge, b: &Edge) -> Ordering {
        b.cost
            .total_cmp(&a.cost)
            .then_with(|| (a.u, a.v).cmp(&(b.u, b.v)))
    }
}

/// All `n(n-1)/2` edges of the complete graph, in `(u, v)` lexicographic order.
pub fn complete_graph(points: &[Point]) -> Vec<Edge> {
    let n = points.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (u, p) in points.iter().enumerate() {
        for (offset, q) in points[u + 1..].iter().enumerate() {
            edges.push(Edge {
                u,
                v: u + 1 + offset,
                cost: p.distance(q),
            });
        }
    }
    edges
}

/// Kruskal's algorithm over `edges` on `n` nodes.
///
/// Sorts `edges` in place (ascending, ties by `(u, v)`) and returns the
/// accepted tree edges in acceptance order. For a connected graph this is
/// exactly `n - 1` edges; `n <= 1` yields none.
pub fn kruskal(edges: &mut [Edge], n: usize) -> Vec<Edge> {
    let target = n.saturating_sub(1);
    let mut tree = Vec::with_capacity(target);
    if target == 0 {
        return tree;
    }

    edges.sort_by(Edge::ascending);

    let mut uf = UnionFind::new(n);
    for edge in edges.iter() {
        let ru = uf.find(edge.u);
        let rv = uf.find(edge.v);
        if ru == rv {
            continue;
        }
        uf.union_roots(ru, rv);
        tree.push(*edge);
        if tree.len() == target {
            break;
        }
    }

    debug!(
        nodes = n,
        candidates = edges.len(),
        accepted = tree.len(),
        "kruskal finished"
    );
    tree
}

/// Minimum spanning tree of the complete Euclidean graph over `points`.
pub fn minimum_spanning_tree(points: &[Point]) -> Vec<Edge> {
    let mut edges = complete_graph(points);
    kruskal(&mut edges, points.len())
}
