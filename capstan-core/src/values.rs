//! Dynamic values tables and the deep-merge primitive.
//!
//! A [`ValuesTable`] is deliberately schema-free: chart authors decide its
//! shape. Values are the YAML variant type (`Mapping | Sequence | scalar`),
//! so shape checks happen at merge time, not at parse time.

use serde_yaml::{Mapping, Value};

/// Arbitrarily nested string-keyed configuration data.
pub type ValuesTable = Mapping;

/// Deep-merge `overlay` onto `base`, returning a new table.
///
/// Overlay wins key-for-key. Where both sides hold tables the merge recurses;
/// in every other case (scalar vs. table, sequence vs. anything) the overlay
/// value replaces the base value wholesale. Never fails: a table/scalar
/// conflict resolves to the overlay side, not an error.
pub fn deep_merge(base: &ValuesTable, overlay: &ValuesTable) -> ValuesTable {
    let mut out = base.clone();
    for (key, value) in overlay {
        let merged = match (out.get(key), value) {
            (Some(Value::Mapping(b)), Value::Mapping(o)) => Value::Mapping(deep_merge(b, o)),
            _ => value.clone(),
        };
        out.insert(key.clone(), merged);
    }
    out
}

/// Human-readable shape of a YAML value, for error messages.
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) | Value::Number(_) | Value::String(_) => "scalar",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "table",
        Value::Tagged(_) => "tagged value",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table(yaml: &str) -> ValuesTable {
        serde_yaml::from_str(yaml).expect("test yaml")
    }

    #[test]
    fn overlay_wins_key_for_key() {
        let merged = deep_merge(&table("a: 1\nb: 2\n"), &table("b: 3\n"));
        assert_eq!(merged.get("a"), Some(&Value::from(1)));
        assert_eq!(merged.get("b"), Some(&Value::from(3)));
    }

    #[test]
    fn nested_tables_merge_recursively() {
        let base = table("image:\n  repository: nginx\n  tag: stable\n");
        let overlay = table("image:\n  tag: edge\n");
        let merged = deep_merge(&base, &overlay);
        let image = match merged.get("image") {
            Some(Value::Mapping(m)) => m,
            other => panic!("image should stay a table, got {other:?}"),
        };
        assert_eq!(image.get("repository"), Some(&Value::from("nginx")));
        assert_eq!(image.get("tag"), Some(&Value::from("edge")));
    }

    // Table-vs-scalar conflicts resolve to the overlay, never an error.
    #[rstest]
    #[case("port: 80\n", "port:\n  internal: 8080\n", "table")]
    #[case("port:\n  internal: 8080\n", "port: 80\n", "scalar")]
    #[case("hosts: [a, b]\n", "hosts: none\n", "scalar")]
    fn shape_conflict_is_last_considered_wins(
        #[case] base: &str,
        #[case] overlay: &str,
        #[case] expect: &'static str,
    ) {
        let merged = deep_merge(&table(base), &table(overlay));
        let key = merged.keys().next().expect("one key").clone();
        assert_eq!(shape_name(merged.get(&key).unwrap()), expect);
    }

    #[test]
    fn sequences_replace_wholesale() {
        let merged = deep_merge(&table("hosts: [a, b, c]\n"), &table("hosts: [z]\n"));
        assert_eq!(
            merged.get("hosts"),
            Some(&Value::Sequence(vec![Value::from("z")]))
        );
    }

    #[test]
    fn empty_overlay_is_identity() {
        let base = table("a: 1\nnested:\n  b: 2\n");
        assert_eq!(deep_merge(&base, &ValuesTable::new()), base);
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let base = table("a: 1\n");
        let overlay = table("a: 2\n");
        let _ = deep_merge(&base, &overlay);
        assert_eq!(base.get("a"), Some(&Value::from(1)));
    }
}
