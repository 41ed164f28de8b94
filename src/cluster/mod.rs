//! Minimum-spanning-tree clustering.
//!
//! ## MST cut (max-spacing k-clustering)
//!
//! Build the minimum spanning tree of the complete Euclidean graph with
//! Kruskal's algorithm, then delete its `k - 1` most expensive edges. The
//! `k` remaining components are the clusters.
//!
//! **Objective**: maximize the spacing, the smallest distance between two
//! points in different clusters:
//!
//! ```text
//! spacing = min_{i ≠ j} min_{p ∈ C_i, q ∈ C_j} ||p - q||
//! ```
//!
//! The cut is exactly the single-linkage hierarchy cut at `k` clusters, so the
//! result is deterministic and needs no seeding or iterations.
//!
//! Each cluster is then summarized by a center and a spread (the largest
//! center-to-member distance). `delta_max`, the largest spread, measures how
//! wide the worst cluster is.
//!
//! **When to use**: the number of clusters is known, clusters are separated by
//! gaps rather than being spherical, and n is small enough for an O(n²) edge
//! list.
//!
//! ## Usage
//!
//! ```rust
//! use mst_cluster::cluster::{CenterKind, Clustering, MstCut};
//! use mst_cluster::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(11.0, 0.0),
//! ];
//!
//! let fit = MstCut::new(2).fit(&points).unwrap();
//! assert_eq!(fit.labels(), &[0, 0, 1, 1]);
//! assert_eq!(fit.delta_max(), 1.0);
//!
//! // Centroids instead of medoids
//! let labels = MstCut::new(2)
//!     .with_center(CenterKind::Centroid)
//!     .fit_predict(&points)
//!     .unwrap();
//! assert_eq!(labels, vec![0, 0, 1, 1]);
//! ```

mod center;
mod mst;
mod mst_cut;
mod traits;
mod util;

pub use center::{centroid, medoid, CenterKind, CenterSpread};
pub use mst::{complete_graph, kruskal, minimum_spanning_tree, Edge};
pub use mst_cut::{cut_tree, discover, Cluster, MstCut, MstCutFit};
pub use traits::Clustering;
pub use util::UnionFind;
