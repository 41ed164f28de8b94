//! Text format for a batch run.
//!
//! Input is whitespace-separated: `n k` followed by `n` coordinate pairs.
//! Output is one `x y` line per center and a final `delta_max` line, every
//! number with six decimals.

use std::fmt::Write as _;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use tracing::{debug, warn};

use crate::cluster::MstCutFit;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Parsed contents of an input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Requested number of clusters.
    pub k: usize,
    /// Points in input order.
    pub points: Vec<Point>,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: impl Fn() -> String) -> Result<T> {
        let token = self.inner.next().ok_or_else(|| Error::MissingToken {
            expected: expected(),
        })?;
        token.parse().map_err(|_| Error::InvalidToken {
            token: token.to_owned(),
            expected: expected(),
        })
    }
}

/// Parse `n k` and `n` coordinate pairs.
///
/// Checks that every pair is present, numeric and finite, and that
/// `1 <= k <= n`. Tokens after the last pair are ignored.
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut tokens = Tokens::new(text);
    let n: usize = tokens.next(|| "point count n".into())?;
    let k: usize = tokens.next(|| "cluster count k".into())?;

    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if k == 0 || k > n {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: n,
        });
    }

    // `n` is untrusted; grow as pairs are actually read.
    let mut points = Vec::new();
    for index in 0..n {
        let x: f64 = tokens.next(|| format!("x coordinate of point {index}"))?;
        let y: f64 = tokens.next(|| format!("y coordinate of point {index}"))?;
        let point = Point::new(x, y);
        if !point.is_finite() {
            return Err(Error::NonFiniteCoordinate { index });
        }
        points.push(point);
    }

    let trailing = tokens.inner.count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last point");
    }
    debug!(n, k, "parsed input");

    Ok(Problem { k, points })
}

/// Read and parse an input file.
pub fn read_problem(path: &Path) -> Result<Problem> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_problem(&text)
}

/// Render centers and `delta_max` in output format.
pub fn render(fit: &MstCutFit) -> String {
    let mut out = String::new();
    for center in fit.centers() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:.6} {:.6}", center.x, center.y);
    }
    let _ = writeln!(out, "{:.6}", fit.delta_max());
    out
}

/// Write the rendered result to `path`, replacing any existing file.
pub fn write_result(path: &Path, fit: &MstCutFit) -> Result<()> {
    std::fs::write(path, render(fit)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
