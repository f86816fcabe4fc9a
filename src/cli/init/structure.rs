//! Site directory structure creation.
//!
//! Creates the standard docsite layout and a first page.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Standard site directory structure.
const SITE_DIRS: &[&str] = &["src/content/docs/getting-started", "src/assets", "public"];

/// Starter page linked from the generated sidebar.
const INTRODUCTION_PAGE: (&str, &str) = (
    "src/content/docs/getting-started/introduction.md",
    "---\ntitle: Introduction\n---\n\nWelcome to your new documentation site.\n",
);

/// Create site directory structure at the given root.
///
/// The root directory is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    let (rel, content) = INTRODUCTION_PAGE;
    let path = root.join(rel);
    fs::write(&path, content).with_context(|| format!("Failed to write '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my_docs");

        create_structure(&root).unwrap();

        assert!(root.join("public").is_dir());
        assert!(root.join("src/assets").is_dir());
        assert!(
            root.join("src/content/docs/getting-started/introduction.md")
                .is_file()
        );
    }
}
