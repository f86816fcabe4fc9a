//! `[content]` section configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where pages and static assets live, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "content")]
pub struct ContentConfig {
    /// Directory holding the markdown pages.
    #[config(default = "src/content/docs", inline_doc)]
    pub dir: PathBuf,

    /// Directory served verbatim (favicon lives here).
    #[config(default = "public", inline_doc)]
    pub public: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "src/content/docs".into(),
            public: "public".into(),
        }
    }
}

impl ContentConfig {
    /// Both directories must be non-empty and relative to the project root.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [(Self::FIELDS.dir, &self.dir), (Self::FIELDS.public, &self.public)] {
            if path.as_os_str().is_empty() {
                diag.error(field, "directory must not be empty");
            } else if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("`{}` must be relative to the project root", path.display()),
                    "remove the leading `/`",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_content_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content, ContentConfig::default());
    }

    #[test]
    fn test_content_absolute_dir_rejected() {
        let config = ContentConfig {
            dir: "/srv/docs".into(),
            public: PathBuf::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["content.dir", "content.public"]);
    }
}
