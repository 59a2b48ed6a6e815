//! Domain types for the capstan chart tree.
//!
//! A [`Chart`] is an immutable bundle of metadata, raw template sources,
//! default values, and nested dependency charts. Rendering never mutates a
//! chart; all types are serializable via serde + serde_yaml.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::values::ValuesTable;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed chart name, used as a path segment and as the values
/// sub-table key when the chart is a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartName(pub String);

impl fmt::Display for ChartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ChartName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChartName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The kind of a chart.
///
/// Application charts produce rendered output. Library charts only export
/// templates (helpers, partials) for consuming charts to compose; they never
/// contribute entries to a render's output map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Application,
    Library,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartType::Application => write!(f, "application"),
            ChartType::Library => write!(f, "library"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Chart metadata, as serialized to/from `Chart.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: ChartName,
    pub version: String,
    #[serde(rename = "appVersion")]
    pub app_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub chart_type: ChartType,
}

/// A single unrendered template belonging to a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Path relative to the chart root, e.g. `templates/service.yaml`.
    pub name: String,
    /// Raw, unrendered template text.
    pub source: String,
}

/// A chart: a named, versioned unit of templates + default values, optionally
/// nesting other charts as dependencies.
///
/// Invariant: a chart's name is unique among its siblings under the same
/// parent (siblings are looked up by name during value coalescing; the
/// coalescer rejects trees that violate this).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub metadata: Metadata,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub default_values: ValuesTable,
    #[serde(default)]
    pub dependencies: Vec<Chart>,
}

impl Chart {
    /// The chart's name as a plain string slice.
    pub fn name(&self) -> &str {
        &self.metadata.name.0
    }

    /// Whether this is a library chart (renders no output of its own).
    pub fn is_library(&self) -> bool {
        self.metadata.chart_type == ChartType::Library
    }
}

/// Deployment identity injected into every node's coalesced values as the
/// reserved `Release` table.
///
/// Modeled as an explicit argument to rendering rather than ambient state;
/// two renders with different options share nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseOptions {
    pub name: String,
    pub namespace: String,
    pub service: String,
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        ReleaseOptions {
            name: "release-name".to_owned(),
            namespace: "default".to_owned(),
            service: "capstan".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_metadata(name: &str) -> Metadata {
        Metadata {
            name: ChartName::from(name),
            version: "0.1.0".to_string(),
            app_version: "1.0.0".to_string(),
            description: None,
            chart_type: ChartType::default(),
        }
    }

    #[test]
    fn chart_name_display() {
        assert_eq!(ChartName::from("web").to_string(), "web");
        assert_eq!(ChartName::from(String::from("svc")).to_string(), "svc");
    }

    #[test]
    fn chart_type_defaults_to_application() {
        let meta: Metadata =
            serde_yaml::from_str("name: web\nversion: 0.1.0\nappVersion: 1.0.0\n")
                .expect("parse");
        assert_eq!(meta.chart_type, ChartType::Application);
    }

    #[test]
    fn metadata_serde_roundtrip() {
        let meta = Metadata {
            description: Some("demo chart".to_string()),
            chart_type: ChartType::Library,
            ..minimal_metadata("lib")
        };
        let yaml = serde_yaml::to_string(&meta).expect("serialize");
        assert!(yaml.contains("type: library"), "got: {yaml}");
        assert!(yaml.contains("appVersion:"), "got: {yaml}");
        let back: Metadata = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back, meta);
    }

    #[test]
    fn is_library() {
        let mut chart = Chart {
            metadata: minimal_metadata("helpers"),
            templates: vec![],
            default_values: ValuesTable::new(),
            dependencies: vec![],
        };
        assert!(!chart.is_library());
        chart.metadata.chart_type = ChartType::Library;
        assert!(chart.is_library());
    }
}
