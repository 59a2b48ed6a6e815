//! Error types for capstan-renderer.

use thiserror::Error;

use capstan_core::CoalesceError;

/// Boxed engine diagnostic, preserved verbatim for display.
pub type BackendDiagnostic = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failure reported by the template backend. The render that produced it is
/// all-or-nothing: no partial output accompanies a `BackendError`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend rejected the batched template set (parse or cross-template
    /// reference failure before any rendering happened).
    #[error("template set rejected: {0}")]
    Parse(#[source] BackendDiagnostic),

    /// Rendering one template failed.
    #[error("template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: BackendDiagnostic,
    },

    /// A node's coalesced values could not be translated into the backend's
    /// context format.
    #[error("context for '{template}': {source}")]
    Context {
        template: String,
        #[source]
        source: BackendDiagnostic,
    },

    /// The backend reported two output files with the same relative path;
    /// output keys must be unique within one render.
    #[error("duplicate output path '{path}'")]
    DuplicateOutput { path: String },
}

/// All errors that can arise from a render invocation.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The value coalescer rejected the chart tree / overrides combination.
    #[error("coalesce error: {0}")]
    Coalesce(#[from] CoalesceError),

    /// The template backend reported a failure.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
