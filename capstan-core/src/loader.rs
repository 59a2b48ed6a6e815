//! The chart-loading seam.
//!
//! capstan never parses archives or directory layouts itself; anything that
//! can turn a source location into a fully populated [`Chart`] tree plugs in
//! here. Scaffolding's create-from-existing path takes a `&dyn ChartLoader`,
//! and tests supply in-memory fakes.

use std::path::Path;

use crate::error::LoadError;
use crate::types::Chart;

/// Loads a fully populated chart tree (metadata + templates + default values
/// + nested dependencies) from a source location.
pub trait ChartLoader {
    fn load(&self, source: &Path) -> Result<Chart, LoadError>;
}
