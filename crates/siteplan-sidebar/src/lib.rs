//! Sidebar navigation tree for siteplan.
//!
//! This crate turns declarative sidebar descriptors ([`NodeSpec`], parsed
//! from `sidebars.toml` or built programmatically) into a validated
//! [`SidebarTree`]: an ordered hierarchy of document entries and collapsible
//! categories. Declared order is semantically meaningful; it determines the
//! on-page navigation order.
//!
//! [`build`] traverses the descriptors depth-first and enforces the tree
//! invariants against a [`DocCorpus`](siteplan_corpus::DocCorpus):
//! globally unique document IDs, no empty categories, and every ID
//! resolving to a known document. The built tree carries the flattened
//! depth-first document sequence used for next/previous-page navigation.
//!
//! # Quick Start
//!
//! ```
//! use siteplan_corpus::DocCorpus;
//! use siteplan_sidebar::{NodeSpec, SidebarSpec, build};
//!
//! let corpus = DocCorpus::from_ids(["intro", "architecture"]);
//! let spec = SidebarSpec {
//!     name: "docs".to_owned(),
//!     nodes: vec![
//!         NodeSpec::labeled_doc("intro", "Overview"),
//!         NodeSpec::category("Specification", vec![NodeSpec::doc("architecture")]),
//!     ],
//! };
//!
//! let tree = build(spec, &corpus)?;
//! assert_eq!(tree.doc_count(), 2);
//! # Ok::<(), siteplan_sidebar::SidebarError>(())
//! ```

mod error;
mod spec;
mod tree;

pub use error::{NodePath, SidebarError};
pub use spec::{NodeSpec, SidebarSpec};
pub use tree::{CategoryEntry, DocEntry, SidebarNode, SidebarTree, build};
