//! Known-document-ID corpus.
//!
//! Navigation structures reference documents by ID; the corpus is the
//! read-only set those references must resolve against. It is an input to
//! validation, never derived from the navigation declarations themselves:
//! either supplied explicitly or scanned from a docs source directory.
//!
//! A document ID is the `/`-separated relative path of a markdown file
//! with the `.md` extension removed (`guides/setup.md` -> `guides/setup`).
//! Hidden and underscore-prefixed files and directories are not documents.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Read-only set of known document IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocCorpus {
    ids: BTreeSet<String>,
}

impl DocCorpus {
    /// Empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Corpus from an explicit list of IDs.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Corpus from the `.md` files under a source directory.
    ///
    /// Returns an empty corpus if the directory doesn't exist.
    #[must_use]
    pub fn scan(source_dir: &Path) -> Self {
        let mut ids = BTreeSet::new();
        if source_dir.exists() {
            scan_directory(source_dir, "", &mut ids);
        }
        Self { ids }
    }

    /// Whether `id` names a known document.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of known documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over all IDs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DocCorpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

/// Collect document IDs under `dir_path`, prefixing them with `id_prefix`.
fn scan_directory(dir_path: &Path, id_prefix: &str, ids: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        // Hidden and underscore-prefixed entries are not documents
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if is_dir {
            let child_prefix = if id_prefix.is_empty() {
                name
            } else {
                format!("{id_prefix}/{name}")
            };
            scan_directory(&entry.path(), &child_prefix, ids);
        } else if let Some(stem) = name.strip_suffix(".md") {
            let id = if id_prefix.is_empty() {
                stem.to_owned()
            } else {
                format!("{id_prefix}/{stem}")
            };
            ids.insert(id);
        }
    }
}
