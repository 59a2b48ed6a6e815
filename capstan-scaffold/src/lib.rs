//! # capstan-scaffold
//!
//! Starter-chart generation: [`create()`] writes a new chart skeleton from the
//! built-in file set, [`create_from`] rebuilds one from an existing chart
//! loaded through a [`capstan_core::ChartLoader`], and [`save_dir`] writes
//! any chart tree to disk. All writes are skip-if-exists, so re-running
//! never clobbers user edits.

pub mod create;
pub mod error;
pub mod save;

pub use create::{create, create_from};
pub use error::ScaffoldError;
pub use save::{
    save_dir, CHARTFILE_NAME, CHARTS_DIR, IGNOREFILE_NAME, TEMPLATES_DIR, VALUESFILE_NAME,
};
