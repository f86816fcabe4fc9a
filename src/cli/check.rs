//! `docsite check`: load and validate the descriptor.

use std::fmt;

use anyhow::Result;
use owo_colors::OwoColorize;

use super::{Cli, common::Project};
use crate::config::{ConfigDiagnostics, GroupKind, SiteConfig};
use crate::log;
use crate::logger::{status_error, status_success};
use crate::utils::{plural_count, plural_s};

/// Validate the site and report a summary.
pub fn check_site(cli: &Cli, warn_only: bool) -> Result<()> {
    let mut project = Project::load(cli)?;
    log!("check"; "validating {}", project.config.config_path.display());

    let summary =
        check_project(&mut project, warn_only).inspect_err(|_| status_error("check failed", ""))?;
    log!("check"; "{summary}");
    status_success("all checks passed");
    Ok(())
}

/// Validate a loaded project, downgrading duplicate slugs if `warn_only`.
pub fn check_project(project: &mut Project, warn_only: bool) -> Result<CheckSummary> {
    if warn_only {
        project.downgrade_duplicates();
    }
    let diag = project.validate()?;
    Ok(CheckSummary::new(&project.config, project.store.len(), &diag))
}

/// Counts shown after a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub groups: usize,
    pub links: usize,
    pub autogenerated: usize,
    pub pages: usize,
    pub warnings: usize,
}

impl CheckSummary {
    pub fn new(config: &SiteConfig, pages: usize, diag: &ConfigDiagnostics) -> Self {
        let (links, autogenerated) =
            config
                .nav
                .iter()
                .fold((0, 0), |(links, auto), group| match group.kind() {
                    Some(GroupKind::Items(items)) => (links + items.len(), auto),
                    Some(GroupKind::Autogenerate(_)) => (links, auto + 1),
                    None => (links, auto),
                });

        Self {
            groups: config.nav.len(),
            links,
            autogenerated,
            pages,
            warnings: diag.warnings().len(),
        }
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({} autogenerated), {} scanned",
            plural_count(self.groups, "group"),
            plural_count(self.links, "link"),
            self.autogenerated,
            plural_count(self.pages, "page"),
        )?;
        if self.warnings > 0 {
            let warnings = format!("{} warning{}", self.warnings, plural_s(self.warnings));
            write!(f, ", {}", warnings.yellow())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    #[test]
    fn test_summary_counts() {
        let config = test_parse_config(
            r#"
[[nav]]
label = "Start"
items = [
    { label = "Intro", slug = "start/intro" },
    { label = "Install", slug = "start/install" },
]

[[nav]]
label = "Reference"
autogenerate = { directory = "reference" }
"#,
        );
        let summary = CheckSummary::new(&config, 7, &ConfigDiagnostics::new());
        assert_eq!(
            summary,
            CheckSummary {
                groups: 2,
                links: 2,
                autogenerated: 1,
                pages: 7,
                warnings: 0,
            }
        );
        assert_eq!(
            summary.to_string(),
            "2 groups, 2 links (1 autogenerated), 7 pages scanned"
        );
    }

    #[test]
    fn test_warn_only_check() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("docsite.toml"),
            r#"
[site]
url = "https://example.org"
title = "Taskly"

[[nav]]
label = "Features"
items = [
    { label = "Tasks", slug = "features/tasks" },
    { label = "Tasks again", slug = "features/tasks" },
]
"#,
        )
        .unwrap();
        let docs = temp.path().join("src/content/docs/features");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("tasks.md"), "# Tasks").unwrap();

        let mut project = Project::open(Path::new("docsite.toml"), temp.path()).unwrap();
        assert!(check_project(&mut project, false).is_err());

        let summary = check_project(&mut project, true).unwrap();
        assert_eq!(summary.links, 2);
        assert_eq!(summary.pages, 1);
        assert_eq!(summary.warnings, 1);
        assert!(summary.to_string().contains("1 warning"));
    }
}
