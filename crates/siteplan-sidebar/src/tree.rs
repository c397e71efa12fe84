//! Validated sidebar tree and its builder.

use std::collections::HashSet;

use serde::Serialize;
use siteplan_corpus::DocCorpus;

use crate::error::{NodePath, SidebarError};
use crate::spec::{NodeSpec, SidebarSpec};

/// A single document entry in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocEntry {
    /// Document ID, unique across the whole tree.
    pub id: String,
    /// Display label.
    pub label: String,
}

/// A collapsible grouping of child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    /// Display label.
    pub label: String,
    /// Initial collapse state in the rendered UI.
    pub collapsed: bool,
    /// Child nodes in display order. Never empty.
    #[serde(rename = "items")]
    pub children: Vec<SidebarNode>,
}

/// A validated sidebar node.
///
/// Serializes with a `type` tag (`doc` / `category`) and `items` children,
/// the shape the rendering framework consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarNode {
    /// A single document.
    Doc(DocEntry),
    /// A grouping of child nodes.
    Category(CategoryEntry),
}

/// A validated, named navigation tree.
///
/// Built once by [`build`], then read-only. Carries the flattened
/// depth-first sequence of all document entries, which is what
/// next/previous-page navigation consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarTree {
    name: String,
    nodes: Vec<SidebarNode>,
    /// Flattened depth-first document order.
    docs: Vec<DocEntry>,
}

impl SidebarTree {
    /// Sidebar name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root-level nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[SidebarNode] {
        &self.nodes
    }

    /// All document entries in depth-first declaration order.
    #[must_use]
    pub fn docs(&self) -> &[DocEntry] {
        &self.docs
    }

    /// Number of document entries in the tree.
    #[must_use]
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Position of a document in the flattened order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.docs.iter().position(|d| d.id == id)
    }

    /// Previous and next documents around `id` in the flattened order.
    ///
    /// Returns `None` when `id` is not in the tree.
    #[must_use]
    pub fn prev_next(&self, id: &str) -> Option<(Option<&DocEntry>, Option<&DocEntry>)> {
        let pos = self.position(id)?;
        let prev = pos.checked_sub(1).map(|i| &self.docs[i]);
        let next = self.docs.get(pos + 1);
        Some((prev, next))
    }
}

/// Build and validate a sidebar tree from its declaration.
///
/// Traverses the descriptors depth-first in declared order, checking each
/// document ID for uniqueness and corpus membership and each category for
/// non-emptiness. The first violation aborts the build.
///
/// # Errors
///
/// Returns [`SidebarError::DuplicateDocId`], [`SidebarError::EmptyCategory`],
/// [`SidebarError::UnresolvedDocId`], or [`SidebarError::InvalidNode`], each
/// carrying the node's path in the declared tree.
pub fn build(spec: SidebarSpec, corpus: &DocCorpus) -> Result<SidebarTree, SidebarError> {
    let mut seen = HashSet::new();
    let mut docs = Vec::new();
    let nodes = build_nodes(spec.nodes, &NodePath::root(), corpus, &mut seen, &mut docs)?;
    Ok(SidebarTree {
        name: spec.name,
        nodes,
        docs,
    })
}

fn build_nodes(
    specs: Vec<NodeSpec>,
    path: &NodePath,
    corpus: &DocCorpus,
    seen: &mut HashSet<String>,
    docs: &mut Vec<DocEntry>,
) -> Result<Vec<SidebarNode>, SidebarError> {
    specs
        .into_iter()
        .map(|spec| build_node(spec, path, corpus, seen, docs))
        .collect()
}

fn build_node(
    spec: NodeSpec,
    path: &NodePath,
    corpus: &DocCorpus,
    seen: &mut HashSet<String>,
    docs: &mut Vec<DocEntry>,
) -> Result<SidebarNode, SidebarError> {
    if let Some(doc) = spec.doc {
        // A doc descriptor cannot also carry children
        if !spec.items.is_empty() {
            return Err(SidebarError::InvalidNode { path: path.clone() });
        }
        if !corpus.contains(&doc) {
            return Err(SidebarError::UnresolvedDocId {
                id: doc,
                path: path.clone(),
            });
        }
        if !seen.insert(doc.clone()) {
            return Err(SidebarError::DuplicateDocId {
                id: doc,
                path: path.clone(),
            });
        }
        let entry = DocEntry {
            label: spec.label.unwrap_or_else(|| doc.clone()),
            id: doc,
        };
        docs.push(entry.clone());
        return Ok(SidebarNode::Doc(entry));
    }

    let Some(label) = spec.label else {
        return Err(SidebarError::InvalidNode { path: path.clone() });
    };
    if spec.items.is_empty() {
        return Err(SidebarError::EmptyCategory {
            label,
            path: path.clone(),
        });
    }
    let children = build_nodes(spec.items, &path.child(&label), corpus, seen, docs)?;
    Ok(SidebarNode::Category(CategoryEntry {
        label,
        collapsed: spec.collapsed.unwrap_or(true),
        children,
    }))
}
