//! The value coalescer — per-node effective values for a chart tree.
//!
//! # Scoping rules
//!
//! Values are scoped to their charts. If chart `web` depends on chart `svc`,
//! `svc`'s templates never see `web`'s values directly: the parent's
//! effective values are examined for a sub-table named `svc`, and only that
//! sub-table is merged (winning) over `svc`'s own defaults. The lookup key is
//! always the immediate child's own name, so sibling charts are fully
//! isolated from each other's override sub-tables.
//!
//! The reserved `Release` and `Chart` tables are injected into every node's
//! result as the final step and always beat user-supplied keys of the same
//! name.

use std::collections::{BTreeMap, BTreeSet};

use serde_yaml::{Mapping, Value};

use crate::error::CoalesceError;
use crate::types::{Chart, ReleaseOptions};
use crate::values::{deep_merge, shape_name, ValuesTable};

/// The per-node output of [`coalesce`], keyed by node identity.
///
/// Node identity is the slash-joined chart path: the root chart `web` is
/// `web`, its dependency `svc` is `web/charts/svc`, and so on. These keys are
/// prefixes of the rendered-output paths produced from the same tree.
pub type CoalescedValues = BTreeMap<String, ValuesTable>;

/// Compute the effective values visible to every node of `root`'s tree.
///
/// Total on well-formed input: a missing sub-table for a dependency is not an
/// error (the child keeps its own defaults). Fails only when a dependency's
/// name position holds a non-table value, or when sibling names collide.
pub fn coalesce(
    root: &Chart,
    overrides: &ValuesTable,
    release: &ReleaseOptions,
) -> Result<CoalescedValues, CoalesceError> {
    let mut out = CoalescedValues::new();
    let effective = deep_merge(&root.default_values, overrides);
    walk(
        root,
        effective,
        root.name().to_owned(),
        root.name().to_owned(),
        release,
        &mut out,
    )?;
    Ok(out)
}

/// Recursive root-to-leaf walk. `node_key` is the slash-joined identity,
/// `dotted` the dotted key path used in error messages.
fn walk(
    chart: &Chart,
    effective: ValuesTable,
    node_key: String,
    dotted: String,
    release: &ReleaseOptions,
    out: &mut CoalescedValues,
) -> Result<(), CoalesceError> {
    let mut seen = BTreeSet::new();
    for child in &chart.dependencies {
        if !seen.insert(child.name()) {
            return Err(CoalesceError::DuplicateChart {
                path: format!("{dotted}.{}", child.name()),
            });
        }
    }

    for child in &chart.dependencies {
        let sub = match effective.get(child.name()) {
            None => ValuesTable::new(),
            Some(Value::Mapping(m)) => m.clone(),
            Some(other) => {
                return Err(CoalesceError::ShapeMismatch {
                    path: format!("{dotted}.{}", child.name()),
                    found: shape_name(other),
                })
            }
        };
        // Parent's sub-table wins over the child's own defaults; the child's
        // defaults fill in everything the parent did not specify.
        let child_effective = deep_merge(&child.default_values, &sub);
        walk(
            child,
            child_effective,
            format!("{node_key}/charts/{}", child.name()),
            format!("{dotted}.{}", child.name()),
            release,
            out,
        )?;
    }

    let mut values = effective;
    inject_builtins(&mut values, chart, release);
    out.insert(node_key, values);
    Ok(())
}

/// Overwrite the reserved `Release` and `Chart` tables in `values`.
fn inject_builtins(values: &mut ValuesTable, chart: &Chart, release: &ReleaseOptions) {
    let mut rel = Mapping::new();
    rel.insert("Name".into(), release.name.as_str().into());
    rel.insert("Namespace".into(), release.namespace.as_str().into());
    rel.insert("Service".into(), release.service.as_str().into());
    values.insert("Release".into(), Value::Mapping(rel));

    let mut meta = Mapping::new();
    meta.insert("Name".into(), chart.name().into());
    meta.insert("Version".into(), chart.metadata.version.as_str().into());
    meta.insert(
        "AppVersion".into(),
        chart.metadata.app_version.as_str().into(),
    );
    values.insert("Chart".into(), Value::Mapping(meta));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
