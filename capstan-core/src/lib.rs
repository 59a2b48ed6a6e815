//! Capstan core library — chart tree model, value coalescing, errors.
//!
//! Public API surface:
//! - [`types`] — [`Chart`] and friends
//! - [`values`] — [`ValuesTable`] and [`deep_merge`](values::deep_merge)
//! - [`coalesce`](mod@coalesce) — the per-node value-scoping algorithm
//! - [`loader`] — the [`ChartLoader`] seam
//! - [`error`] — [`CoalesceError`], [`LoadError`]

pub mod coalesce;
pub mod error;
pub mod loader;
pub mod types;
pub mod values;

pub use coalesce::{coalesce, CoalescedValues};
pub use error::{CoalesceError, LoadError};
pub use loader::ChartLoader;
pub use types::{Chart, ChartName, ChartType, Metadata, ReleaseOptions, Template};
pub use values::ValuesTable;
