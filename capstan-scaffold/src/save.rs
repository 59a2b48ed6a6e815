//! Chart directory layout, the skip-if-exists write primitive, and
//! [`save_dir`].

use std::path::{Path, PathBuf};

use capstan_core::Chart;

use crate::error::{io_err, ScaffoldError};

/// The chart metadata file name.
pub const CHARTFILE_NAME: &str = "Chart.yaml";
/// The default-values file name.
pub const VALUESFILE_NAME: &str = "values.yaml";
/// Relative directory name for templates.
pub const TEMPLATES_DIR: &str = "templates";
/// Relative directory name for chart dependencies.
pub const CHARTS_DIR: &str = "charts";
/// The ignore-patterns file name.
pub const IGNOREFILE_NAME: &str = ".capstanignore";

// ---------------------------------------------------------------------------
// Write primitives
// ---------------------------------------------------------------------------

/// Write `content` to `path` unless a file already exists there.
///
/// Existing files are left untouched and skipped — scaffold creation may be
/// re-run on a partially populated directory without clobbering user edits.
/// An explicit existence check rather than exclusive-create flags, so the
/// behavior is identical across platforms. Returns whether a write happened.
pub(crate) fn write_new(path: &Path, content: &str) -> Result<bool, ScaffoldError> {
    if path.exists() {
        tracing::debug!("exists, skipping: {}", path.display());
        return Ok(false);
    }
    std::fs::write(path, content).map_err(|e| io_err(path, e))?;
    tracing::info!("wrote: {}", path.display());
    Ok(true)
}

/// Run `populate` for the chart directory `cdir`; on failure, best-effort
/// remove `cdir` if this call created it. A pre-existing directory is never
/// removed, and a cleanup failure never masks the original error.
pub(crate) fn with_cleanup<F>(cdir: &Path, populate: F) -> Result<(), ScaffoldError>
where
    F: FnOnce() -> Result<(), ScaffoldError>,
{
    let created_now = !cdir.exists();
    match populate() {
        Ok(()) => Ok(()),
        Err(e) => {
            if created_now {
                let _ = std::fs::remove_dir_all(cdir);
            }
            Err(e)
        }
    }
}

pub(crate) fn create_layout_dirs(cdir: &Path) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(cdir).map_err(|e| io_err(cdir, e))?;
    for d in [TEMPLATES_DIR, CHARTS_DIR] {
        let dir = cdir.join(d);
        std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// save_dir
// ---------------------------------------------------------------------------

/// Write `chart`'s whole tree under `dest/<chart-name>/`: `Chart.yaml`,
/// `values.yaml`, every template at its relative path, and dependencies
/// recursively under `charts/`. Uses the same skip-if-exists primitive as
/// scaffold creation.
pub fn save_dir(chart: &Chart, dest: &Path) -> Result<PathBuf, ScaffoldError> {
    let cdir = dest.join(chart.name());
    with_cleanup(&cdir, || write_tree(chart, &cdir))?;
    Ok(cdir)
}

fn write_tree(chart: &Chart, cdir: &Path) -> Result<(), ScaffoldError> {
    create_layout_dirs(cdir)?;

    write_new(
        &cdir.join(CHARTFILE_NAME),
        &serde_yaml::to_string(&chart.metadata)?,
    )?;
    write_new(
        &cdir.join(VALUESFILE_NAME),
        &serde_yaml::to_string(&chart.default_values)?,
    )?;

    for template in &chart.templates {
        let path = cdir.join(&template.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
        write_new(&path, &template.source)?;
    }

    let charts_dir = cdir.join(CHARTS_DIR);
    for child in &chart.dependencies {
        save_dir(child, &charts_dir)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
