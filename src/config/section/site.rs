//! `[site]` section configuration.
//!
//! Site-level metadata handed to the generator as-is.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.org"
//! base = "/docs"
//! title = "Taskly"
//! description = "Task management for small teams"
//! logo = "src/assets/logo.svg"
//! favicon = "/favicon.svg"
//! stylesheets = ["src/styles/custom.css"]
//! integrations = ["sitemap", "docs-theme"]
//!
//! [site.social]
//! github = "https://github.com/example/taskly"
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::extract_url_path;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Canonical deployment origin.
    #[config(default = "https://example.org", inline_doc)]
    pub url: String,

    /// URL path prefix the site is served under.
    #[serde(default = "default_base")]
    #[config(default = "/", inline_doc)]
    pub base: String,

    /// Site title.
    #[config(default = "My Docs", inline_doc)]
    pub title: String,

    /// Site description.
    #[serde(default)]
    #[config(inline_doc)]
    pub description: String,

    /// Logo asset, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[config(inline_doc)]
    pub logo: Option<PathBuf>,

    /// Favicon, relative to the public directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[config(inline_doc)]
    pub favicon: Option<PathBuf>,

    /// Custom stylesheets, applied in listed order.
    #[serde(default)]
    pub stylesheets: Vec<PathBuf>,

    /// Generator integrations enabled by name.
    #[serde(default)]
    pub integrations: Vec<String>,

    /// Platform name -> profile URL.
    #[serde(default)]
    #[config(hidden)]
    pub social: BTreeMap<String, String>,
}

fn default_base() -> String {
    "/".into()
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            base: default_base(),
            title: String::new(),
            description: String::new(),
            logo: None,
            favicon: None,
            stylesheets: Vec::new(),
            integrations: Vec::new(),
            social: BTreeMap::new(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata shape.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `url` is an http(s) URL with a host
    /// - `base` is an absolute path prefix
    /// - social links are http(s) URLs
    /// - asset references and integration names are not empty, integrations are unique
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "title must not be empty");
        }

        self.validate_url(diag);
        self.validate_base(diag);

        for (platform, link) in &self.social {
            let field = Self::FIELDS.social.join(platform);
            if platform.trim().is_empty() {
                diag.error(field.clone(), "platform name must not be empty");
            }
            if let Err(message) = check_http_url(link) {
                diag.error_with_hint(field, message, "use format like https://github.com/org/repo");
            }
        }

        for (field, path) in [
            (Self::FIELDS.logo, &self.logo),
            (Self::FIELDS.favicon, &self.favicon),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                diag.error_with_hint(field, "path must not be empty", "remove the key instead");
            }
        }

        for (i, sheet) in self.stylesheets.iter().enumerate() {
            let field = Self::FIELDS.stylesheets.index(i);
            if sheet.as_os_str().is_empty() {
                diag.error(field, "stylesheet path must not be empty");
            } else if sheet.extension().is_none_or(|ext| ext != "css") {
                diag.warn(field, format!("`{}` does not look like a stylesheet", sheet.display()));
            }
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.integrations.len());
        for (i, name) in self.integrations.iter().enumerate() {
            let field = Self::FIELDS.integrations.index(i);
            let name = name.trim();
            if name.is_empty() {
                diag.error(field, "integration name must not be empty");
            } else if seen.contains(&name) {
                diag.error(field, format!("integration `{name}` is registered twice"));
            } else {
                seen.push(name);
            }
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if let Err(message) = check_http_url(&self.url) {
            diag.error_with_hint(
                Self::FIELDS.url,
                message,
                "use format like https://example.org",
            );
            return;
        }

        // A path in the URL should agree with the base path
        if let Some(path) = extract_url_path(&self.url)
            && !path.is_empty()
            && path != self.base.trim_matches('/')
        {
            diag.warn(
                Self::FIELDS.url,
                format!(
                    "URL path `/{}` differs from base `{}`; links are built from base",
                    path, self.base
                ),
            );
        }
    }

    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        let base = self.base.as_str();
        if !base.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base `{base}` must start with `/`"),
                format!("use \"/{}\"", base.trim_start_matches('/')),
            );
        } else if base.contains("//") || base.contains(['?', '#', ' ']) {
            diag.error(
                Self::FIELDS.base,
                format!("base `{base}` is not a clean path prefix"),
            );
        }
    }

    /// Base path without surrounding slashes (`"/docs/"` -> `"docs"`, `"/"` -> `""`).
    pub fn base_segment(&self) -> &str {
        self.base.trim_matches('/')
    }

    /// Public URL of the site root: origin joined with the base path, ending in `/`.
    pub fn root_url(&self) -> String {
        // Any path on `url` is superseded by `base`
        let origin = url::Url::parse(&self.url)
            .map(|u| u.origin().ascii_serialization())
            .unwrap_or_else(|_| self.url.trim_end_matches('/').to_string());
        match self.base_segment() {
            "" => format!("{origin}/"),
            base => format!("{origin}/{base}/"),
        }
    }

    /// Site-relative link for a content slug (`getting-started/intro` -> `/docs/getting-started/intro/`).
    ///
    /// The root `index` page maps to the base path itself.
    pub fn href_for(&self, slug: &str) -> String {
        match (self.base_segment(), slug) {
            ("", "index") => "/".to_string(),
            (base, "index") => format!("/{base}/"),
            ("", slug) => format!("/{slug}/"),
            (base, slug) => format!("/{base}/{slug}/"),
        }
    }
}

/// Check that a string is an http(s) URL with a host.
fn check_http_url(input: &str) -> Result<(), String> {
    match url::Url::parse(input) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ));
            }
            if parsed.host_str().is_none() {
                return Err("URL must have a valid host".into());
            }
            Ok(())
        }
        Err(e) => Err(format!("invalid URL `{input}`: {e}")),
    }
}
