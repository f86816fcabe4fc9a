//! Configuration file generation.
//!
//! Creates docsite.toml for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{ContentConfig, SiteInfoConfig, ValidateConfig};

/// Default config filename
pub const CONFIG_FILE: &str = "docsite.toml";

/// Starter sidebar, matching the page written by `structure`.
const NAV_TEMPLATE: &str = r#"# Sidebar groups, in display order.
# Each group lists `items` explicitly or sets `autogenerate`.
[[nav]]
label = "Getting Started"
items = [
    { label = "Introduction", slug = "getting-started/introduction" },
]

# [[nav]]
# label = "Reference"
# autogenerate = { directory = "reference" }
"#;

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [content] section
    out.push_str(&ContentConfig::template_with_header());
    out.push('\n');

    // [validate] section
    out.push_str(&ValidateConfig::template_with_header());
    out.push('\n');

    // [[nav]] groups
    out.push_str(NAV_TEMPLATE);

    out
}

/// Write default docsite.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
