use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened, read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// The input ended before a required value.
    #[error("unexpected end of input: expected {expected}")]
    MissingToken {
        /// What was being read.
        expected: String,
    },

    /// A token could not be parsed as the expected kind of number.
    #[error("invalid token {token:?}: expected {expected}")]
    InvalidToken {
        /// Offending token.
        token: String,
        /// What was being read.
        expected: String,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the point.
        index: usize,
    },
}

impl Error {
    /// Process exit status for this error.
    ///
    /// `1` when a file is unavailable, `2` for malformed input.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io { .. } => 1,
            Error::EmptyInput
            | Error::InvalidClusterCount { .. }
            | Error::MissingToken { .. }
            | Error::InvalidToken { .. }
            | Error::NonFiniteCoordinate { .. } => 2,
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
