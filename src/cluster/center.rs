//! Cluster centers and spreads.
//!
//! The spread of a cluster is the largest distance from its center to one of
//! its members. Two center rules are available:
//!
//! - [`CenterKind::Medoid`]: the member minimizing its maximum distance to the
//!   other members (the discrete 1-center). The spread is that minimized
//!   maximum. O(m²) for a cluster of `m` points.
//! - [`CenterKind::Centroid`]: the coordinate mean. The spread is the
//!   maximum distance from the mean to a member. O(m).
//!
//! Both give a singleton cluster its own point as center and spread `0`.

use std::fmt;
use std::str::FromStr;

use crate::geometry::Point;

/// Rule used to pick a cluster's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterKind {
    /// Member point with the smallest maximum distance to the others.
    #[default]
    Medoid,
    /// Arithmetic mean of the member coordinates.
    Centroid,
}

impl fmt::Display for CenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CenterKind::Medoid => f.write_str("medoid"),
            CenterKind::Centroid => f.write_str("centroid"),
        }
    }
}

impl FromStr for CenterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "medoid" => Ok(CenterKind::Medoid),
            "centroid" | "mean" => Ok(CenterKind::Centroid),
            other => Err(format!("unknown center rule {other:?} (expected medoid or centroid)")),
        }
    }
}

/// Center point and spread of one cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterSpread {
    /// Chosen center.
    pub center: Point,
    /// Index of the center point for medoids, `None` for centroids.
    pub center_index: Option<usize>,
    /// Maximum distance from the center to a member.
    pub spread: f64,
}

impl CenterKind {
    /// Center and spread of the cluster made of `members` (indices into `points`).
    ///
    /// `members` must be non-empty and sorted ascending.
    pub fn compute(self, points: &[Point], members: &[usize]) -> CenterSpread {
        match self {
            CenterKind::Medoid => medoid(points, members),
            CenterKind::Centroid => centroid(points, members),
        }
    }
}

/// Discrete 1-center of `members`; ties go to the lowest point index.
pub fn medoid(points: &[Point], members: &[usize]) -> CenterSpread {
    debug_assert!(!members.is_empty());

    let mut best_index = members[0];
    let mut best_radius = f64::INFINITY;
    for &p in members {
        let radius = members
            .iter()
            .filter(|&&q| q != p)
            .map(|&q| points[p].distance(&points[q]))
            .fold(0.0, f64::max);
        // Strict comparison keeps the earliest (lowest index) candidate on ties.
        if radius < best_radius {
            best_radius = radius;
            best_index = p;
        }
    }

    CenterSpread {
        center: points[best_index],
        center_index: Some(best_index),
        spread: best_radius,
    }
}

/// Coordinate mean of `members` and the largest member distance to it.
pub fn centroid(points: &[Point], members: &[usize]) -> CenterSpread {
    debug_assert!(!members.is_empty());

    if let [only] = members {
        return CenterSpread {
            center: points[*only],
            center_index: None,
            spread: 0.0,
        };
    }

    let m = members.len() as f64;
    let (sx, sy) = members
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &i| (sx + points[i].x, sy + points[i].y));
    let center = Point::new(sx / m, sy / m);
    let spread = members
        .iter()
        .map(|&i| center.distance(&points[i]))
        .fold(0.0, f64::max);

    CenterSpread {
        center,
        center_index: None,
        spread,
    }
}
