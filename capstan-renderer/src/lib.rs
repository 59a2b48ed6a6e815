//! # capstan-renderer
//!
//! Tera-backed rendering for capstan chart trees: coalesces each node's
//! values, batches every template through the backend once, and returns a
//! path → content map.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use capstan_core::{Chart, ReleaseOptions, ValuesTable};
//! use capstan_renderer::render;
//!
//! fn render_tree(chart: &Chart, overrides: &ValuesTable) {
//!     if let Ok(outputs) = render(chart, overrides, &ReleaseOptions::default()) {
//!         for (path, content) in &outputs {
//!             println!("{path}: {} bytes", content.len());
//!         }
//!     }
//! }
//! ```

pub mod backend;
pub mod error;
pub mod flatten;
pub mod render;

pub use backend::{BackendInput, RenderedFile, TemplateBackend, TeraBackend};
pub use error::{BackendError, RenderError};
pub use render::{render, render_with_backend, RenderedOutput};
