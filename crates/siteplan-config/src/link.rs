//! Link types shared by navbar and footer configuration.
//!
//! A [`LinkItem`] is declared with either a `doc` (internal document ID) or
//! an `href` (external URL). The raw shape keeps both optional so parsing
//! never fails on an over- or under-specified link; validation enforces the
//! exactly-one invariant, after which [`LinkItem::target`] always resolves.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_absolute_url, require_non_empty};

/// A labeled reference to an internal document or an external URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Display label.
    pub label: String,
    /// Internal document ID, resolved against the document corpus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// External absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The resolved target of a validated [`LinkItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Internal document reference.
    Doc(&'a str),
    /// External URL.
    External(&'a str),
}

impl LinkItem {
    /// The link's target, or `None` when the invariant does not hold.
    ///
    /// For links that passed [`validate`](Self::validate) this always
    /// returns `Some`.
    #[must_use]
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        match (&self.doc, &self.href) {
            (Some(doc), None) => Some(LinkTarget::Doc(doc)),
            (None, Some(href)) => Some(LinkTarget::External(href)),
            _ => None,
        }
    }

    /// Validate the label and the exactly-one-target invariant.
    ///
    /// `field` is the config path of this link (e.g. `navbar[0]`), used in
    /// error messages.
    pub(crate) fn validate(&self, field: &str) -> Result<(), ConfigError> {
        require_non_empty(&self.label, &format!("{field}.label"))?;
        match (&self.doc, &self.href) {
            (Some(doc), None) => require_non_empty(doc, &format!("{field}.doc")),
            (None, Some(href)) => require_absolute_url(href, &format!("{field}.href")),
            _ => Err(ConfigError::AmbiguousLinkTarget {
                field: field.to_owned(),
            }),
        }
    }
}

/// Horizontal placement of a navbar item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    /// Left side of the navbar.
    #[default]
    Left,
    /// Right side of the navbar.
    Right,
}

/// A navbar link with its placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarItem {
    /// The link itself.
    #[serde(flatten)]
    pub link: LinkItem,
    /// Placement, left unless declared otherwise.
    #[serde(default)]
    pub position: NavbarPosition,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<LinkItem>,
}
