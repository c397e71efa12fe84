//! Site bundle assembly.
//!
//! Combines a [`SiteConfig`] and a sidebar declaration into the validated
//! [`SiteBundle`] handed to the rendering framework. Assembly is the point
//! where cross-references meet the document corpus: the sidebar is built
//! against it, and every internal navbar/footer link must resolve in it.
//!
//! The contract with the renderer: a returned bundle satisfies every
//! configuration and tree invariant, or assembly failed with a specific
//! error before any build proceeded.

use serde::Serialize;
use siteplan_config::{ConfigError, LinkItem, LinkTarget, SiteConfig};
use siteplan_corpus::DocCorpus;
use siteplan_sidebar::{SidebarError, SidebarSpec, SidebarTree};

/// The validated pair consumed by the rendering framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteBundle {
    /// Validated site configuration.
    pub config: SiteConfig,
    /// Validated navigation tree.
    pub sidebar: SidebarTree,
}

/// Assembly error.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Configuration validation failed.
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// Sidebar validation failed.
    #[error("{0}")]
    Sidebar(#[from] SidebarError),
    /// A navbar or footer link references an unknown document.
    #[error("link \"{label}\" references unknown document id \"{id}\"")]
    UnresolvedLink {
        /// The link's display label.
        label: String,
        /// The unresolved document ID.
        id: String,
    },
}

/// Assemble and validate the site bundle.
///
/// Validates the configuration, builds the sidebar tree against the corpus,
/// then resolves internal navbar/footer links. Fail-fast: the first
/// violation aborts assembly.
///
/// # Errors
///
/// Returns a [`BuildError`] naming the first violated invariant and where
/// it was declared.
pub fn assemble(
    config: SiteConfig,
    spec: SidebarSpec,
    corpus: &DocCorpus,
) -> Result<SiteBundle, BuildError> {
    config.validate()?;
    let sidebar = siteplan_sidebar::build(spec, corpus)?;
    resolve_links(&config, corpus)?;

    tracing::debug!(
        sidebar = sidebar.name(),
        docs = sidebar.doc_count(),
        corpus = corpus.len(),
        "site bundle assembled"
    );

    Ok(SiteBundle { config, sidebar })
}

/// Check every internal navbar/footer link against the corpus.
fn resolve_links(config: &SiteConfig, corpus: &DocCorpus) -> Result<(), BuildError> {
    let navbar = config.navbar.iter().map(|item| &item.link);
    let footer = config
        .footer
        .columns
        .iter()
        .flat_map(|column| column.items.iter());

    for link in navbar.chain(footer) {
        if let Some(LinkTarget::Doc(id)) = link.target()
            && !corpus.contains(id)
        {
            return Err(unresolved(link, id));
        }
    }
    Ok(())
}

fn unresolved(link: &LinkItem, id: &str) -> BuildError {
    BuildError::UnresolvedLink {
        label: link.label.clone(),
        id: id.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use siteplan_sidebar::NodeSpec;

    use super::*;

    fn config() -> SiteConfig {
        toml::from_str(
            r#"
[site]
title = "Liquid Context Protocol"
tagline = "Open protocol specification"
url = "https://example.github.io"
base_url = "/lcp-spec/"
organization = "example-org"
project = "lcp-spec"

[[navbar]]
label = "Documentation"
doc = "intro"

[[footer.columns]]
title = "Documentation"
items = [
    { label = "Introduction", doc = "intro" },
    { label = "Issues", href = "https://github.com/example-org/lcp-spec/issues" },
]
"#,
        )
        .unwrap()
    }

    fn sidebar_spec() -> SidebarSpec {
        SidebarSpec {
            name: "docs".to_owned(),
            nodes: vec![
                NodeSpec::labeled_doc("intro", "Overview"),
                NodeSpec::expanded_category(
                    "Specification",
                    vec![NodeSpec::labeled_doc("architecture", "2. Architecture")],
                ),
            ],
        }
    }

    fn corpus() -> DocCorpus {
        DocCorpus::from_ids(["intro", "architecture"])
    }

    #[test]
    fn test_assemble_valid_bundle() {
        let bundle = assemble(config(), sidebar_spec(), &corpus()).unwrap();

        assert_eq!(bundle.config.site.title, "Liquid Context Protocol");
        assert_eq!(bundle.sidebar.doc_count(), 2);
    }

    #[test]
    fn test_assemble_rejects_invalid_config_first() {
        let mut config = config();
        config.site.title = String::new();

        // Sidebar would also fail (empty corpus), but config is checked first
        let err = assemble(config, sidebar_spec(), &DocCorpus::new()).unwrap_err();
        assert!(matches!(err, BuildError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_assemble_rejects_unresolved_sidebar_doc() {
        let corpus = DocCorpus::from_ids(["intro"]);
        let err = assemble(config(), sidebar_spec(), &corpus).unwrap_err();
        assert!(
            matches!(
                err,
                BuildError::Sidebar(SidebarError::UnresolvedDocId { .. })
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn test_assemble_rejects_unresolved_navbar_link() {
        let mut config = config();
        config.navbar[0].link.doc = Some("missing".to_owned());

        let err = assemble(config, sidebar_spec(), &corpus()).unwrap_err();
        let BuildError::UnresolvedLink { label, id } = err else {
            panic!("expected UnresolvedLink, got {err:?}");
        };
        assert_eq!(label, "Documentation");
        assert_eq!(id, "missing");
    }

    #[test]
    fn test_assemble_rejects_unresolved_footer_link() {
        let mut config = config();
        config.footer.columns[0].items[0].doc = Some("missing".to_owned());

        let err = assemble(config, sidebar_spec(), &corpus()).unwrap_err();
        assert!(matches!(err, BuildError::UnresolvedLink { .. }));
    }

    #[test]
    fn test_bundle_serializes_for_renderer() {
        let bundle = assemble(config(), sidebar_spec(), &corpus()).unwrap();

        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["config"]["site"]["title"], "Liquid Context Protocol");
        assert_eq!(json["sidebar"]["name"], "docs");
        assert_eq!(json["sidebar"]["nodes"][0]["type"], "doc");
        assert_eq!(json["sidebar"]["docs"][1]["id"], "architecture");
    }
}
