use std::path::PathBuf;

use thiserror::Error;

/// Which side of the comparison a degenerate fit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitSubject {
    TrueTrack,
    Group,
}

impl std::fmt::Display for FitSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitSubject::TrueTrack => write!(f, "true track"),
            FitSubject::Group => write!(f, "group"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("input shape mismatch: event has {hits} hits but {labels} labels were given")]
    InputShape { hits: usize, labels: usize },
    #[error("degenerate line fit for {kind} {id} ({n_hits} hits): {reason}")]
    DegenerateFit {
        kind: FitSubject,
        id: i64,
        n_hits: usize,
        reason: &'static str,
    },
    #[error("column {column} has {actual} rows but the event has {expected} hits")]
    ColumnLength {
        column: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("event has no X/y coordinates; parameter matching needs them")]
    MissingCoordinates,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing column {column} in {path}")]
    MissingColumn { column: String, path: PathBuf },
    #[error("parse error at {path}:{line}: {msg}")]
    Parse {
        path: PathBuf,
        line: usize,
        msg: String,
    },
    #[error("{0} contains no rows")]
    Empty(PathBuf),
    #[error(transparent)]
    Shape(#[from] ScoreError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
