//! Error types for capstan-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while coalescing a chart tree's values.
#[derive(Debug, Error)]
pub enum CoalesceError {
    /// A key position that must hold a table holds something else (e.g. a
    /// parent supplied a scalar under a dependency's name). Carries the
    /// dotted key path from the root chart.
    #[error("values at '{path}' must be a table, found {found}")]
    ShapeMismatch { path: String, found: &'static str },

    /// Two sibling charts share a name, making override scoping ambiguous.
    #[error("duplicate chart at '{path}': sibling names must be unique")]
    DuplicateChart { path: String },
}

/// Errors surfaced by [`ChartLoader`](crate::loader::ChartLoader)
/// implementations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed chart metadata or values — includes path and line context
    /// from serde_yaml.
    #[error("failed to parse chart source at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
