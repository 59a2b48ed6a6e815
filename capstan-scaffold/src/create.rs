//! Scaffold creation — a new chart directory from the built-in starter set,
//! or from an existing chart loaded through a [`ChartLoader`].

use std::path::{Path, PathBuf};

use capstan_core::{ChartLoader, Metadata};

use crate::error::ScaffoldError;
use crate::save::{
    create_layout_dirs, save_dir, with_cleanup, write_new, CHARTFILE_NAME, IGNOREFILE_NAME,
    TEMPLATES_DIR, VALUESFILE_NAME,
};

/// The substitution token replaced with the chart name in every starter file.
const PLACEHOLDER: &str = "<CHARTNAME>";

// ---------------------------------------------------------------------------
// Built-in starter files — baked in at compile time via include_str!
// ---------------------------------------------------------------------------

const DEFAULT_CHARTFILE: &str = include_str!("files/chart.yaml");
const DEFAULT_VALUES: &str = include_str!("files/values.yaml");
const DEFAULT_IGNORE: &str = include_str!("files/capstanignore");
const DEFAULT_HELPERS: &str = include_str!("files/_helpers.tera");
const DEFAULT_DEPLOYMENT: &str = include_str!("files/deployment.yaml");
const DEFAULT_SERVICE: &str = include_str!("files/service.yaml");
const DEFAULT_INGRESS: &str = include_str!("files/ingress.yaml");
const DEFAULT_NOTES: &str = include_str!("files/NOTES.txt");

/// Replace every occurrence of the `<CHARTNAME>` token with `name`.
fn transform(source: &str, name: &str) -> String {
    source.replace(PLACEHOLDER, name)
}

fn builtin_files(cdir: &Path, name: &str) -> Vec<(PathBuf, String)> {
    let templates = cdir.join(TEMPLATES_DIR);
    vec![
        (cdir.join(CHARTFILE_NAME), transform(DEFAULT_CHARTFILE, name)),
        (cdir.join(VALUESFILE_NAME), transform(DEFAULT_VALUES, name)),
        (cdir.join(IGNOREFILE_NAME), DEFAULT_IGNORE.to_string()),
        (
            templates.join("_helpers.tera"),
            transform(DEFAULT_HELPERS, name),
        ),
        (
            templates.join("deployment.yaml"),
            transform(DEFAULT_DEPLOYMENT, name),
        ),
        (
            templates.join("service.yaml"),
            transform(DEFAULT_SERVICE, name),
        ),
        (
            templates.join("ingress.yaml"),
            transform(DEFAULT_INGRESS, name),
        ),
        (templates.join("NOTES.txt"), transform(DEFAULT_NOTES, name)),
    ]
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

/// Create a new chart skeleton at `dest/<name>/`.
///
/// Fails before any filesystem mutation if `dest` does not exist or is not a
/// directory, or if `dest/<name>` is occupied by a non-directory file. Writes
/// the layout directories (`templates/`, `charts/`) and the built-in starter
/// files, substituting every `<CHARTNAME>` token with `name`; files that already
/// exist are skipped, so re-running on a partially populated directory is
/// safe. On a mid-scaffold write failure the newly created chart directory is
/// removed best-effort.
///
/// Returns the absolute path of the chart directory.
pub fn create(name: &str, dest: &Path) -> Result<PathBuf, ScaffoldError> {
    let dest = match std::fs::metadata(dest) {
        Err(_) => {
            return Err(ScaffoldError::NoSuchDirectory {
                path: dest.to_path_buf(),
            })
        }
        Ok(meta) if !meta.is_dir() => {
            return Err(ScaffoldError::NotADirectory {
                path: dest.to_path_buf(),
            })
        }
        Ok(_) => dest
            .canonicalize()
            .map_err(|e| crate::error::io_err(dest, e))?,
    };

    let cdir = dest.join(name);
    if cdir.exists() && !cdir.is_dir() {
        return Err(ScaffoldError::Obstructed { path: cdir });
    }

    with_cleanup(&cdir, || {
        create_layout_dirs(&cdir)?;
        for (path, content) in builtin_files(&cdir, name) {
            write_new(&path, &content)?;
        }
        Ok(())
    })?;
    Ok(cdir)
}

// ---------------------------------------------------------------------------
// create_from
// ---------------------------------------------------------------------------

/// Scaffold a new chart from an existing one.
///
/// Loads the chart at `source` via `loader`, replaces its metadata wholesale
/// with `metadata`, rewrites every template by the same `<CHARTNAME>`
/// substitution keyed to the chart's new name, and writes the resulting tree
/// under `dest` with [`save_dir`].
pub fn create_from(
    metadata: Metadata,
    dest: &Path,
    source: &Path,
    loader: &dyn ChartLoader,
) -> Result<PathBuf, ScaffoldError> {
    let mut chart = loader.load(source)?;
    chart.metadata = metadata;
    let name = chart.name().to_owned();
    for template in &mut chart.templates {
        template.source = transform(&template.source, &name);
    }
    save_dir(&chart, dest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
