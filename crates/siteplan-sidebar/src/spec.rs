//! Declarative sidebar descriptors.
//!
//! A sidebar is declared in `sidebars.toml` as an ordered list of node
//! tables. A table carrying `doc` declares a document entry; a table
//! carrying `label` and `items` declares a category:
//!
//! ```toml
//! name = "docs"
//!
//! [[nodes]]
//! doc = "intro"
//! label = "Overview"
//!
//! [[nodes]]
//! label = "Specification"
//! collapsed = false
//!
//! [[nodes.items]]
//! doc = "architecture"
//! label = "2. Architecture"
//! ```
//!
//! Descriptors are raw: every field is optional at parse time, and
//! [`build`](crate::build) classifies each node and enforces the tree
//! invariants. Unknown keys are rejected at parse time.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SidebarError;

/// A named sidebar declaration: an ordered sequence of node descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarSpec {
    /// Sidebar name, referenced by the rendering framework.
    pub name: String,
    /// Root-level node descriptors in display order.
    pub nodes: Vec<NodeSpec>,
}

impl Default for SidebarSpec {
    fn default() -> Self {
        Self {
            name: "docs".to_owned(),
            nodes: Vec::new(),
        }
    }
}

impl SidebarSpec {
    /// Load a sidebar declaration from a `sidebars.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not a valid
    /// sidebar declaration.
    pub fn load(path: &Path) -> Result<Self, SidebarError> {
        if !path.exists() {
            return Err(SidebarError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Raw descriptor for one sidebar node.
///
/// A descriptor with `doc` set declares a document entry; one with `label`
/// and `items` declares a category. Classification happens during
/// [`build`](crate::build), which rejects descriptors that fit neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeSpec {
    /// Document ID, resolved against the corpus at build time.
    pub doc: Option<String>,
    /// Display label. Required for categories; document entries fall back
    /// to their ID.
    pub label: Option<String>,
    /// Initial collapse state in the rendered UI; categories collapse by
    /// default. Display-only; never affects validation.
    pub collapsed: Option<bool>,
    /// Child descriptors in display order (categories only).
    pub items: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Document node labeled by its ID.
    pub fn doc(id: impl Into<String>) -> Self {
        Self {
            doc: Some(id.into()),
            ..Self::default()
        }
    }

    /// Document node with an explicit label.
    pub fn labeled_doc(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            doc: Some(id.into()),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Category with the given children, collapsed by default.
    pub fn category(label: impl Into<String>, items: Vec<NodeSpec>) -> Self {
        Self {
            label: Some(label.into()),
            items,
            ..Self::default()
        }
    }

    /// Category that starts expanded.
    pub fn expanded_category(label: impl Into<String>, items: Vec<NodeSpec>) -> Self {
        Self {
            label: Some(label.into()),
            collapsed: Some(false),
            items,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_empty_spec() {
        let spec: SidebarSpec = toml::from_str("").unwrap();
        assert_eq!(spec.name, "docs");
        assert!(spec.nodes.is_empty());
    }

    #[test]
    fn test_parse_doc_and_category_nodes() {
        let spec: SidebarSpec = toml::from_str(
            r#"
name = "spec"

[[nodes]]
doc = "intro"
label = "Overview"

[[nodes]]
label = "Specification"
collapsed = false

[[nodes.items]]
doc = "architecture"
"#,
        )
        .unwrap();

        assert_eq!(spec.name, "spec");
        assert_eq!(
            spec.nodes,
            vec![
                NodeSpec::labeled_doc("intro", "Overview"),
                NodeSpec::expanded_category("Specification", vec![NodeSpec::doc("architecture")]),
            ]
        );
    }

    #[test]
    fn test_parse_three_level_nesting() {
        let spec: SidebarSpec = toml::from_str(
            r#"
[[nodes]]
label = "Guides"

[[nodes.items]]
label = "Advanced"

[[nodes.items.items]]
doc = "guides/tuning"
"#,
        )
        .unwrap();

        assert_eq!(
            spec.nodes,
            vec![NodeSpec::category(
                "Guides",
                vec![NodeSpec::category(
                    "Advanced",
                    vec![NodeSpec::doc("guides/tuning")],
                )],
            )]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result: Result<SidebarSpec, _> = toml::from_str(
            r#"
[[nodes]]
doc = "intro"
href = "https://example.com"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SidebarSpec::load(Path::new("/nonexistent/sidebars.toml")).unwrap_err();
        assert!(matches!(err, SidebarError::NotFound(_)));
    }
}
