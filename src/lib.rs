//! Max-spacing clustering of 2D points.
//!
//! `mst-cluster` partitions points into exactly `k` clusters by cutting the
//! `k - 1` heaviest edges of their Euclidean minimum spanning tree.
//!
//! - [`cluster`]: Kruskal MST, union-find, the cut itself, centers and spreads
//! - [`io`]: the whitespace-separated batch input and six-decimal output format

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod geometry;
pub mod io;

pub use cluster::{CenterKind, Cluster, Clustering, Edge, MstCut, MstCutFit, UnionFind};
pub use error::{Error, Result};
pub use geometry::Point;
