//! JSON manifest handed to the external generator.
//!
//! ```json
//! {
//!   "generator": "docsite 0.3.0",
//!   "root_url": "https://example.org/docs/",
//!   "site": { "url": "https://example.org", "base": "/docs", "title": "Taskly", ... },
//!   "favicon": "public/favicon.svg",
//!   "sidebar": { "groups": [ { "label": "Getting Started", "items": [ ... ] } ] }
//! }
//! ```

use serde::Serialize;
use std::path::PathBuf;

use crate::config::{SiteConfig, SiteInfoConfig};
use crate::content::ContentStore;
use crate::nav::{ResolvedNav, resolve_navigation};

/// Site metadata plus the resolved sidebar.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub generator: String,
    pub root_url: String,
    pub site: &'a SiteInfoConfig,
    /// Favicon relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<PathBuf>,
    pub sidebar: ResolvedNav,
}

impl<'a> Manifest<'a> {
    /// Build the manifest of a validated descriptor.
    pub fn new(config: &'a SiteConfig, store: &impl ContentStore) -> Self {
        Self {
            generator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            root_url: config.site.root_url(),
            site: &config.site,
            favicon: config.favicon_path(),
            sidebar: resolve_navigation(&config.nav, store, &config.site),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryContentStore;
    use serde_json::Value;

    #[test]
    fn test_manifest_json() {
        let config: SiteConfig = r#"
[site]
url = "https://example.org"
base = "/docs"
title = "Taskly"
favicon = "/favicon.svg"

[[nav]]
label = "Getting Started"
items = [{ label = "Introduction", slug = "getting-started/introduction" }]

[[nav]]
label = "Reference"
autogenerate = { directory = "reference" }
"#
        .parse()
        .unwrap();
        let store = MemoryContentStore::new()
            .with_page("getting-started/introduction")
            .with_titled_page("reference/cli", "CLI");

        let json = Manifest::new(&config, &store).to_json(false).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["root_url"], "https://example.org/docs/");
        assert_eq!(value["site"]["title"], "Taskly");
        assert_eq!(value["favicon"], "public/favicon.svg");

        let groups = &value["sidebar"]["groups"];
        assert_eq!(
            groups[0]["items"][0]["href"],
            "/docs/getting-started/introduction/"
        );
        assert_eq!(groups[1]["directory"], "reference");
        assert_eq!(groups[1]["items"][0]["label"], "CLI");
    }

    #[test]
    fn test_manifest_key_order() {
        let config: SiteConfig = "nav = []\n[site]\nurl = \"https://example.org\"\ntitle = \"T\""
            .parse()
            .unwrap();
        let json = Manifest::new(&config, &MemoryContentStore::new())
            .to_json(true)
            .unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["generator", "root_url", "site", "sidebar"]);
    }
}
