//! CLI command implementations.

pub mod check;
pub mod emit;

pub use check::CheckArgs;
pub use emit::EmitArgs;

use std::path::PathBuf;

use clap::Args;
use siteplan_config::SiteConfig;
use siteplan_corpus::DocCorpus;
use siteplan_sidebar::SidebarSpec;
use siteplan_site::SiteBundle;

use crate::error::CliError;

/// Declaration sources shared by all commands.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the site configuration file.
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Path to the sidebar declaration file.
    #[arg(short, long, default_value = "sidebars.toml")]
    sidebars: PathBuf,

    /// Directory scanned for known document IDs.
    #[arg(short = 'd', long, default_value = "docs")]
    docs_dir: PathBuf,

    /// Comma-separated known document IDs (skips the directory scan).
    #[arg(long, value_delimiter = ',')]
    ids: Vec<String>,
}

impl SourceArgs {
    /// Load all declarations and assemble the validated bundle.
    pub fn assemble(&self) -> Result<SiteBundle, CliError> {
        let config = SiteConfig::load(&self.config)?;
        let spec = SidebarSpec::load(&self.sidebars)?;
        let corpus = self.corpus();

        tracing::debug!(ids = corpus.len(), "document corpus ready");

        Ok(siteplan_site::assemble(config, spec, &corpus)?)
    }

    /// The document corpus: explicit IDs when given, a scan otherwise.
    fn corpus(&self) -> DocCorpus {
        if self.ids.is_empty() {
            DocCorpus::scan(&self.docs_dir)
        } else {
            DocCorpus::from_ids(self.ids.iter().cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn source_args(dir: &std::path::Path) -> SourceArgs {
        SourceArgs {
            config: dir.join("site.toml"),
            sidebars: dir.join("sidebars.toml"),
            docs_dir: dir.join("docs"),
            ids: Vec::new(),
        }
    }

    #[test]
    fn test_assemble_from_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("site.toml"),
            r#"
[site]
title = "Liquid Context Protocol"
tagline = "Protocol specification"
url = "https://example.github.io"
base_url = "/lcp-spec/"
organization = "example-org"
project = "lcp-spec"

[[navbar]]
label = "Documentation"
doc = "intro"
"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("sidebars.toml"),
            r#"
[[nodes]]
doc = "intro"
label = "Overview"

[[nodes]]
label = "Specification"

[[nodes.items]]
doc = "architecture"
"#,
        )
        .unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("intro.md"), "# Overview").unwrap();
        fs::write(docs.join("architecture.md"), "# Architecture").unwrap();

        let bundle = source_args(temp_dir.path()).assemble().unwrap();

        assert_eq!(bundle.sidebar.doc_count(), 2);
        assert_eq!(bundle.config.site.project, "lcp-spec");
    }

    #[test]
    fn test_explicit_ids_skip_the_scan() {
        let args = SourceArgs {
            config: PathBuf::from("site.toml"),
            sidebars: PathBuf::from("sidebars.toml"),
            docs_dir: PathBuf::from("/nonexistent"),
            ids: vec!["intro".to_owned(), "architecture".to_owned()],
        };

        let corpus = args.corpus();
        assert_eq!(corpus.len(), 2);
        assert!(corpus.contains("architecture"));
    }
}
