//! Sidebar error types.

use std::fmt;
use std::path::PathBuf;

/// Position of a node in the declared tree: the labels of its ancestor
/// categories, root first. Used in error messages to locate violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// Path of a root-level node.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a node nested one level deeper, under `segment`.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_owned());
        Self(segments)
    }

    /// Ancestor labels, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "the sidebar root")
        } else {
            write!(f, "\"{}\"", self.0.join("\" > \""))
        }
    }
}

/// Sidebar declaration or validation error.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// File not found.
    #[error("Sidebar file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The same document appears more than once in the tree.
    #[error("duplicate document id \"{id}\" under {path}")]
    DuplicateDocId {
        /// The repeated document ID.
        id: String,
        /// Where the second occurrence was declared.
        path: NodePath,
    },
    /// A category was declared without children.
    #[error("category \"{label}\" under {path} has no children")]
    EmptyCategory {
        /// The category's label.
        label: String,
        /// Where the category was declared.
        path: NodePath,
    },
    /// A document ID does not resolve against the corpus.
    #[error("unknown document id \"{id}\" under {path}")]
    UnresolvedDocId {
        /// The unresolved document ID.
        id: String,
        /// Where the reference was declared.
        path: NodePath,
    },
    /// A descriptor fits neither node kind.
    #[error("node under {path} must be either a doc entry or a labeled category")]
    InvalidNode {
        /// Where the descriptor was declared.
        path: NodePath,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_path_display() {
        assert_eq!(NodePath::root().to_string(), "the sidebar root");

        let nested = NodePath::root().child("Specification").child("Layers");
        assert_eq!(nested.to_string(), "\"Specification\" > \"Layers\"");
    }

    #[test]
    fn test_node_path_segments() {
        let path = NodePath::root().child("Advanced Topics");
        assert_eq!(path.segments(), ["Advanced Topics".to_owned()]);
    }
}
