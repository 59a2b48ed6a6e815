//! The render orchestrator — coalesce, flatten, invoke the backend, collect.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use capstan_core::{coalesce, Chart, ReleaseOptions, ValuesTable};

use crate::backend::{TemplateBackend, TeraBackend};
use crate::error::{BackendError, RenderError};
use crate::flatten::flatten;

/// Rendered output: backend-reported relative path → rendered content.
/// BTreeMap for deterministic iteration; keys are unique within one render
/// and never merged across renders.
pub type RenderedOutput = BTreeMap<String, String>;

/// Render `chart`'s whole tree with the default Tera backend.
///
/// Pure and idempotent: the same chart, overrides, and release options yield
/// byte-identical output, and repeated calls share no mutable state. Multiple
/// trees may be rendered concurrently without coordination.
pub fn render(
    chart: &Chart,
    overrides: &ValuesTable,
    release: &ReleaseOptions,
) -> Result<RenderedOutput, RenderError> {
    render_with_backend(chart, overrides, release, &TeraBackend::new())
}

/// Render with a caller-supplied backend — the seam for swapping the
/// template engine without touching the coalescing logic.
///
/// Coalescer and backend errors propagate verbatim; on a backend failure no
/// partial output is returned.
pub fn render_with_backend(
    chart: &Chart,
    overrides: &ValuesTable,
    release: &ReleaseOptions,
    backend: &dyn TemplateBackend,
) -> Result<RenderedOutput, RenderError> {
    let values = coalesce(chart, overrides, release)?;
    let inputs = flatten(chart, &values);
    let files = backend.render_all(&inputs)?;

    // Output paths are unique within one render; a backend reporting the
    // same path twice is a contract violation, not a last-wins merge.
    let mut output = RenderedOutput::new();
    for file in files {
        match output.entry(file.name) {
            Entry::Occupied(e) => {
                return Err(BackendError::DuplicateOutput {
                    path: e.key().clone(),
                }
                .into())
            }
            Entry::Vacant(e) => {
                e.insert(file.content);
            }
        }
    }
    Ok(output)
}
