//! Error types for capstan-scaffold.

use std::path::PathBuf;

use thiserror::Error;

use capstan_core::LoadError;

/// All errors that can arise from scaffold operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The destination directory does not exist.
    #[error("no such directory {path}")]
    NoSuchDirectory { path: PathBuf },

    /// The destination path exists but is not a directory.
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// The chart's target path is occupied by a non-directory file.
    #[error("file {path} already exists and is not a directory")]
    Obstructed { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error (Chart.yaml / values.yaml emission).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The chart loader failed on the source chart.
    #[error("could not load source chart: {0}")]
    Load(#[from] LoadError),
}

/// Convenience constructor for [`ScaffoldError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.into(),
        source,
    }
}
