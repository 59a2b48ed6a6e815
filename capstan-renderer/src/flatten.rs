//! Chart-tree flattening — turns a [`Chart`] plus its coalesced values into
//! the backend's batched input list.

use capstan_core::{Chart, CoalescedValues};

use crate::backend::BackendInput;

/// Flatten `chart`'s tree into backend inputs, pairing every template with
/// the coalesced values of the node that owns it.
///
/// Template names are `<node-path>/<template-name>`, e.g.
/// `web/charts/svc/templates/service.yaml` — the node path uses the same
/// `charts/` nesting as the coalesce map keys. Pre-order: a node's templates
/// come before its dependencies'.
pub fn flatten(chart: &Chart, values: &CoalescedValues) -> Vec<BackendInput> {
    let mut inputs = Vec::new();
    flatten_node(chart, chart.name().to_owned(), values, &mut inputs);
    inputs
}

fn flatten_node(
    chart: &Chart,
    node_key: String,
    values: &CoalescedValues,
    inputs: &mut Vec<BackendInput>,
) {
    // Every key produced here was inserted by the coalescer for the same
    // tree; an absent entry would mean the maps were built from different
    // charts, so an empty context is the conservative fallback.
    let context = values.get(&node_key).cloned().unwrap_or_default();
    let emit_node = !chart.is_library();

    for template in &chart.templates {
        inputs.push(BackendInput {
            name: format!("{node_key}/{}", template.name),
            source: template.source.clone(),
            context: context.clone(),
            emit: emit_node && !is_partial(&template.name),
        });
    }
    for child in &chart.dependencies {
        flatten_node(
            child,
            format!("{node_key}/charts/{}", child.name()),
            values,
            inputs,
        );
    }
}

/// Templates whose file name starts with `_` are helpers meant for
/// composition (`{% import %}`), never emitted as output.
fn is_partial(template_name: &str) -> bool {
    template_name
        .rsplit('/')
        .next()
        .is_some_and(|base| base.starts_with('_'))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
