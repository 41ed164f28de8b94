//! Max-spacing k-clustering by cutting a minimum spanning tree.
//!
//! # The Algorithm
//!
//! 1. **MST**: Kruskal over the complete Euclidean graph (see [`super::mst`]).
//! 2. **Cut**: sort the `n - 1` tree edges by descending cost and drop the
//!    first `k - 1`. Removing `j` edges from a tree leaves `j + 1` components,
//!    so re-joining the remaining edges in a fresh [`UnionFind`] gives exactly
//!    `k` components.
//! 3. **Discovery**: scan points in index order; each new root opens a cluster.
//!    This first-encountered order is the order clusters are reported in.
//! 4. **Centers**: each cluster gets a center and spread
//!    (see [`super::center`]); `delta_max` is the largest spread.
//!
//! The resulting partition maximizes the smallest distance between points of
//! different clusters (the single-linkage dendrogram cut at `k`).
//!
//! ## Complexity
//!
//! - **Time**: O(n² log n), dominated by sorting the complete edge list.
//! - **Space**: O(n²) for the edge list.

use tracing::{debug, trace};

use super::center::{CenterKind, CenterSpread};
use super::mst::{self, Edge};
use super::traits::Clustering;
use super::util::UnionFind;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// MST-cut clusterer for a fixed number of clusters.
#[derive(Debug, Clone)]
pub struct MstCut {
    k: usize,
    center: CenterKind,
}

impl MstCut {
    /// Clusterer producing `k` clusters with medoid centers.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            center: CenterKind::default(),
        }
    }

    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the center rule.
    pub fn with_center(mut self, center: CenterKind) -> Self {
        self.center = center;
        self
    }

    /// Configured center rule.
    pub fn center(&self) -> CenterKind {
        self.center
    }

    /// Run the full pipeline on `points`.
    ///
    /// Fails with [`Error::EmptyInput`] when `points` is empty,
    /// [`Error::InvalidClusterCount`] unless `1 <= k <= n`, and
    /// [`Error::NonFiniteCoordinate`] for NaN or infinite coordinates.
    pub fn fit(&self, points: &[Point]) -> Result<MstCutFit> {
        let n = points.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index });
        }

        let tree = mst::minimum_spanning_tree(points);
        let uf = cut_tree(&tree, n, self.k);
        let (labels, members) = discover(uf);
        assert_eq!(
            members.len(),
            self.k,
            "cutting {} edges from a spanning tree must leave {} components",
            self.k - 1,
            self.k
        );

        let clusters: Vec<Cluster> = members
            .into_iter()
            .enumerate()
            .map(|(id, members)| {
                let CenterSpread {
                    center,
                    center_index,
                    spread,
                } = self.center.compute(points, &members);
                trace!(cluster = id, size = members.len(), spread, "cluster summarized");
                Cluster {
                    members,
                    center,
                    center_index,
                    spread,
                }
            })
            .collect();

        let delta_max = clusters.iter().map(|c| c.spread).fold(0.0, f64::max);
        debug!(
            n,
            k = self.k,
            center = %self.center,
            delta_max,
            "mst cut finished"
        );

        Ok(MstCutFit {
            tree,
            labels,
            clusters,
            delta_max,
        })
    }
}

impl Clustering for MstCut {
    fn fit_predict(&self, data: &[Point]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// One cluster of a fitted partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Member point indices, ascending.
    pub members: Vec<usize>,
    /// Representative center.
    pub center: Point,
    /// Index of the center point when the center is a medoid.
    pub center_index: Option<usize>,
    /// Maximum distance from `center` to a member.
    pub spread: f64,
}

impl Cluster {
    /// Number of member points.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false` for clusters produced by [`MstCut::fit`].
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Result of [`MstCut::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct MstCutFit {
    tree: Vec<Edge>,
    labels: Vec<usize>,
    clusters: Vec<Cluster>,
    delta_max: f64,
}

impl MstCutFit {
    /// Minimum spanning tree edges, ascending by cost.
    pub fn tree(&self) -> &[Edge] {
        &self.tree
    }

    /// Cluster position (in discovery order) of every point.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Clusters in discovery order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Centers in discovery order.
    pub fn centers(&self) -> Vec<Point> {
        self.clusters.iter().map(|c| c.center).collect()
    }

    /// Largest cluster spread.
    pub fn delta_max(&self) -> f64 {
        self.delta_max
    }
}

/// Join every tree edge except the `k - 1` most expensive ones.
///
/// `tree` must be a spanning tree on `n` nodes and `1 <= k <= n`.
pub fn cut_tree(tree: &[Edge], n: usize, k: usize) -> UnionFind {
    let mut by_cost = tree.to_vec();
    by_cost.sort_by(Edge::descending);

    let mut uf = UnionFind::new(n);
    for edge in by_cost.iter().skip(k.saturating_sub(1)) {
        uf.union(edge.u, edge.v);
    }
    uf
}

/// Label every point with its component and collect members per component.
///
/// Components are numbered in the order their first point appears when
/// scanning indices ascending; member lists are ascending.
pub fn discover(mut uf: UnionFind) -> (Vec<usize>, Vec<Vec<usize>>) {
    let n = uf.len();
    let mut slot_of_root = vec![usize::MAX; n];
    let mut labels = Vec::with_capacity(n);
    let mut members: Vec<Vec<usize>> = Vec::new();

    for i in 0..n {
        let root = uf.find(i);
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = members.len();
            members.push(Vec::new());
        }
        let slot = slot_of_root[root];
        labels.push(slot);
        members[slot].push(i);
    }

    (labels, members)
}
