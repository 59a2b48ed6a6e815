//! The template-backend seam — [`TemplateBackend`] and the Tera
//! implementation.
//!
//! The backend is invoked exactly once per chart-tree render with the whole
//! flattened template set, so cross-template references (`{% import %}`,
//! `{% include %}`) within one tree resolve. Each input carries the coalesced
//! values of the chart node that owns it; a template never sees a sibling's
//! or an ancestor's table.

use tera::Tera;

use capstan_core::ValuesTable;

use crate::error::BackendError;

// ---------------------------------------------------------------------------
// Batch input / output
// ---------------------------------------------------------------------------

/// One template handed to the backend.
#[derive(Debug, Clone)]
pub struct BackendInput {
    /// Backend-addressable path, e.g. `web/charts/svc/templates/service.yaml`.
    pub name: String,
    /// Raw template source.
    pub source: String,
    /// The owning chart node's coalesced values.
    pub context: ValuesTable,
    /// Whether this template produces an output file. Library-chart templates
    /// and `_`-prefixed partials are registered for composition only.
    pub emit: bool,
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Relative path, reported verbatim as the output-map key.
    pub name: String,
    pub content: String,
}

/// An external template-expansion engine, batched per chart tree.
///
/// All-or-nothing: if any template fails, the whole invocation fails and no
/// partial output is returned.
pub trait TemplateBackend {
    fn render_all(&self, inputs: &[BackendInput]) -> Result<Vec<RenderedFile>, BackendError>;
}

// ---------------------------------------------------------------------------
// Tera backend
// ---------------------------------------------------------------------------

/// Tera-based [`TemplateBackend`].
///
/// Builds a fresh `Tera` instance per `render_all` call, so nothing from one
/// render (templates, values) can leak into another and concurrent renders
/// need no locking around a shared engine.
#[derive(Debug, Default)]
pub struct TeraBackend;

impl TeraBackend {
    pub fn new() -> Self {
        TeraBackend
    }
}

impl TemplateBackend for TeraBackend {
    fn render_all(&self, inputs: &[BackendInput]) -> Result<Vec<RenderedFile>, BackendError> {
        let mut tera = Tera::default();
        let raw: Vec<(&str, &str)> = inputs
            .iter()
            .map(|i| (i.name.as_str(), i.source.as_str()))
            .collect();
        tera.add_raw_templates(raw)
            .map_err(|e| BackendError::Parse(Box::new(e)))?;

        let mut files = Vec::new();
        for input in inputs.iter().filter(|i| i.emit) {
            let ctx = tera::Context::from_serialize(&input.context).map_err(|e| {
                BackendError::Context {
                    template: input.name.clone(),
                    source: Box::new(e),
                }
            })?;
            let content = tera.render(&input.name, &ctx).map_err(|e| {
                BackendError::Render {
                    template: input.name.clone(),
                    source: Box::new(e),
                }
            })?;
            files.push(RenderedFile {
                name: input.name.clone(),
                content,
            });
        }
        Ok(files)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
