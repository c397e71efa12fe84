//! Site configuration for siteplan.
//!
//! Parses `site.toml` declarations with serde and validates them before the
//! rendering framework consumes them. Validation is pure and fail-fast: the
//! first violated invariant aborts with an error naming the offending field.
//!
//! The configuration is an explicitly constructed immutable value. There is
//! no global state; callers pass the validated [`SiteConfig`] by reference
//! to whatever builds the site.

mod link;

pub use link::{FooterColumn, LinkItem, LinkTarget, NavbarItem, NavbarPosition};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

/// Site configuration as declared in `site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site identity and URLs.
    pub site: SiteInfo,
    /// Locale configuration.
    pub i18n: I18nConfig,
    /// Navbar links in display order.
    pub navbar: Vec<NavbarItem>,
    /// Footer configuration.
    pub footer: FooterConfig,
    /// Theme settings. Opaque to siteplan: the schema belongs to the
    /// rendering framework, so the table is passed through unvalidated.
    pub theme: toml::Table,
}

/// Site identity: titles, URLs, and repository coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Site title.
    pub title: String,
    /// Short tagline shown alongside the title.
    pub tagline: String,
    /// Absolute URL the site is served from.
    pub url: String,
    /// Path prefix under `url`. Must start and end with `/`.
    pub base_url: String,
    /// Organization owning the document repository.
    pub organization: String,
    /// Repository / project name.
    pub project: String,
}

/// Locale configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used when none is requested.
    pub default_locale: String,
    /// All locales the site is built for. Must include `default_locale`.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned()],
        }
    }
}

/// Footer configuration: link columns plus an optional copyright line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Copyright line, passed through to the renderer unvalidated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    /// Link columns in display order.
    pub columns: Vec<FooterColumn>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A required field is empty.
    #[error("{field} cannot be empty")]
    MissingField {
        /// Config field path (e.g. `site.title`, `navbar[1].label`).
        field: String,
    },
    /// A URL field is malformed.
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl {
        /// Config field path.
        field: String,
        /// What the URL check rejected.
        reason: String,
    },
    /// A link sets both or neither of its possible targets.
    #[error("{field} must reference exactly one of doc or href")]
    AmbiguousLinkTarget {
        /// Config field path of the link.
        field: String,
    },
    /// The locale set is empty or excludes the default locale.
    #[error("i18n.locales must be non-empty and include the default locale \"{default_locale}\"")]
    EmptyLocaleSet {
        /// The configured default locale.
        default_locale: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingField {
            field: field.to_owned(),
        });
    }
    Ok(())
}

/// Require a field to hold a syntactically valid absolute URL with a host.
pub(crate) fn require_absolute_url(value: &str, field: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field: field.to_owned(),
        reason: e.to_string(),
    })?;
    if !parsed.has_host() {
        return Err(ConfigError::InvalidUrl {
            field: field.to_owned(),
            reason: "missing host".to_owned(),
        });
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from a `site.toml` file and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not valid TOML,
    /// or violates a configuration invariant.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Pure check over the structure: on success the configuration is usable
    /// unchanged. Validation is idempotent.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_i18n()?;
        self.validate_links()?;
        Ok(())
    }

    /// Canonical repository URL built from organization and project.
    #[must_use]
    pub fn repository_url(&self) -> String {
        format!(
            "https://github.com/{}/{}",
            self.site.organization, self.site.project
        )
    }

    /// Edit-link base for documents, rooted at the repository's docs tree.
    #[must_use]
    pub fn edit_url(&self) -> String {
        format!("{}/tree/main/docs", self.repository_url())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.tagline, "site.tagline")?;
        require_non_empty(&self.site.base_url, "site.base_url")?;
        require_non_empty(&self.site.organization, "site.organization")?;
        require_non_empty(&self.site.project, "site.project")?;

        if !(self.site.base_url.starts_with('/') && self.site.base_url.ends_with('/')) {
            return Err(ConfigError::InvalidUrl {
                field: "site.base_url".to_owned(),
                reason: "must start and end with '/'".to_owned(),
            });
        }

        require_non_empty(&self.site.url, "site.url")?;
        require_absolute_url(&self.site.url, "site.url")?;

        Ok(())
    }

    fn validate_i18n(&self) -> Result<(), ConfigError> {
        let i18n = &self.i18n;
        if i18n.locales.is_empty() || !i18n.locales.contains(&i18n.default_locale) {
            return Err(ConfigError::EmptyLocaleSet {
                default_locale: i18n.default_locale.clone(),
            });
        }
        Ok(())
    }

    fn validate_links(&self) -> Result<(), ConfigError> {
        for (i, item) in self.navbar.iter().enumerate() {
            item.link.validate(&format!("navbar[{i}]"))?;
        }
        for (c, column) in self.footer.columns.iter().enumerate() {
            require_non_empty(&column.title, &format!("footer.columns[{c}].title"))?;
            for (i, item) in column.items.iter().enumerate() {
                item.validate(&format!("footer.columns[{c}].items[{i}]"))?;
            }
        }
        Ok(())
    }
}
