//! Common utilities shared across CLI commands.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{ConfigDiagnostics, SiteConfig, ValidateLevel};
use crate::content::FsContentStore;
use crate::debug;
use crate::utils::plural_count;

use super::Cli;

/// A loaded descriptor together with its scanned content.
pub struct Project {
    pub config: SiteConfig,
    pub store: FsContentStore,
    /// Warnings from parsing the descriptor (unknown keys, empty nav).
    pub parse_warnings: ConfigDiagnostics,
}

impl Project {
    /// Locate and load `docsite.toml` from the working directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::open(&cli.config, &cwd)
    }

    /// Locate `config_name` upward from `cwd`, then scan the content directory.
    pub fn open(config_name: &Path, cwd: &Path) -> Result<Self> {
        let hint = || {
            format!(
                "cannot load '{}'. Run 'docsite init' to create a new site.",
                config_name.display()
            )
        };
        let path = SiteConfig::locate(config_name, cwd).with_context(hint)?;
        let (config, parse_warnings) = SiteConfig::read(&path).with_context(hint)?;

        let content_dir = config.content_dir();
        let store = FsContentStore::scan(&content_dir, &config.root)?;
        debug!("content"; "found {} in {}", plural_count(store.len(), "page"), content_dir.display());

        Ok(Self {
            config,
            store,
            parse_warnings,
        })
    }

    /// Treat duplicate slugs as warnings for this run.
    pub fn downgrade_duplicates(&mut self) {
        self.config.validate.duplicate_slugs = ValidateLevel::Warn;
    }

    /// Check every reference, printing parse and reference warnings on success.
    pub fn validate(&self) -> Result<ConfigDiagnostics> {
        let references = self.config.validate_references(&self.store)?;
        let mut diag = self.parse_warnings.clone();
        diag.extend(references);
        diag.print_warnings();
        Ok(diag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    const DUPLICATED: &str = r#"
[site]
url = "https://example.org"
title = "Taskly"

[[nav]]
label = "Features"
items = [{ label = "Tasks", slug = "features/tasks" }]

[[nav]]
label = "Guides"
items = [{ label = "Working with tasks", slug = "features/tasks" }]
"#;

    fn site(config: &str, pages: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docsite.toml"), config).unwrap();
        for page in pages {
            let path = temp.path().join("src/content/docs").join(page);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "# Page").unwrap();
        }
        temp
    }

    fn validation_error(project: &Project) -> ErrorKind {
        let err = project.validate().unwrap_err();
        err.downcast_ref::<crate::config::ConfigError>().unwrap().kind()
    }

    #[test]
    fn test_open_finds_pages() {
        let temp = site(DUPLICATED, &["features/tasks.md"]);
        let project = Project::open(Path::new("docsite.toml"), temp.path()).unwrap();
        assert_eq!(project.config.root, temp.path());
        assert_eq!(project.store.len(), 1);
        assert!(project.parse_warnings.warnings().is_empty());
    }

    #[test]
    fn test_duplicate_fails_unless_downgraded() {
        let temp = site(DUPLICATED, &["features/tasks.md"]);
        let mut project = Project::open(Path::new("docsite.toml"), temp.path()).unwrap();
        assert_eq!(validation_error(&project), ErrorKind::DuplicateSlug);

        project.downgrade_duplicates();
        let diag = project.validate().unwrap();
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0.as_str(), "nav[1].items[0].slug");
    }

    #[test]
    fn test_downgraded_duplicate_still_needs_pages() {
        let temp = site(DUPLICATED, &["getting-started/introduction.md"]);
        let mut project = Project::open(Path::new("docsite.toml"), temp.path()).unwrap();
        project.downgrade_duplicates();
        assert_eq!(validation_error(&project), ErrorKind::DanglingReference);
    }

    #[test]
    fn test_parse_warnings_are_reported() {
        let config = format!("{DUPLICATED}\n[content]\ndrafts = true\n");
        let temp = site(&config, &["features/tasks.md"]);
        let mut project = Project::open(Path::new("docsite.toml"), temp.path()).unwrap();
        project.downgrade_duplicates();

        let diag = project.validate().unwrap();
        assert_eq!(diag.warnings().len(), 2);
        assert!(diag.warnings()[0].0.as_str().contains("drafts"));
    }

    #[test]
    fn test_open_missing_config() {
        let temp = TempDir::new().unwrap();
        let err = Project::open(Path::new("docsite.toml"), temp.path()).err().unwrap();
        assert!(err.to_string().contains("docsite init"));
    }
}
