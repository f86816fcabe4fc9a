//! `docsite nav`: print the resolved sidebar.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::{Cli, common::Project};
use crate::log;
use crate::nav::{ResolvedNav, resolve_navigation};
use crate::utils::plural_count;

/// Validate, then print the sidebar tree to stdout.
pub fn print_nav(cli: &Cli) -> Result<()> {
    let project = Project::load(cli)?;
    project.validate()?;

    let nav = resolve_navigation(&project.config.nav, &project.store, &project.config.site);
    log!(
        "nav";
        "{}, {}",
        plural_count(nav.groups.len(), "group"),
        plural_count(nav.link_count(), "link")
    );
    print!("{}", render_tree(&nav));
    Ok(())
}

/// Render the sidebar as an indented tree.
///
/// ```text
/// Getting Started
/// └── Introduction  /docs/getting-started/introduction/
/// Reference (reference/, collapsed)
/// ├── CLI  /docs/reference/cli/
/// └── Task states  /docs/reference/task-states/
/// ```
pub fn render_tree(nav: &ResolvedNav) -> String {
    let mut out = String::new();

    for group in &nav.groups {
        out.push_str(&group.label.bold().to_string());

        let mut notes = Vec::new();
        if let Some(directory) = &group.directory {
            notes.push(format!("{directory}/"));
        }
        if group.collapsed {
            notes.push("collapsed".to_string());
        }
        if !notes.is_empty() {
            out.push_str(&format!(" ({})", notes.join(", ")).dimmed().to_string());
        }
        out.push('\n');

        for (i, item) in group.items.iter().enumerate() {
            let branch = if i + 1 == group.items.len() {
                "└──"
            } else {
                "├──"
            };
            out.push_str(&format!(
                "{} {}  {}\n",
                branch.dimmed(),
                item.label,
                item.href.cyan()
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{ResolvedGroup, ResolvedItem};

    fn item(label: &str, slug: &str) -> ResolvedItem {
        ResolvedItem {
            label: label.into(),
            slug: slug.into(),
            href: format!("/docs/{slug}/"),
        }
    }

    #[test]
    fn test_render_tree() {
        let nav = ResolvedNav {
            groups: vec![
                ResolvedGroup {
                    label: "Getting Started".into(),
                    collapsed: false,
                    directory: None,
                    items: vec![item("Introduction", "getting-started/introduction")],
                },
                ResolvedGroup {
                    label: "Reference".into(),
                    collapsed: true,
                    directory: Some("reference".into()),
                    items: vec![item("CLI", "reference/cli"), item("Task states", "reference/task-states")],
                },
            ],
        };

        let tree = render_tree(&nav);
        let lines: Vec<_> = tree.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Getting Started"));
        assert!(lines[1].contains("└──") && lines[1].contains("Introduction"));
        assert!(lines[2].contains("reference/, collapsed"));
        assert!(lines[3].contains("├──") && lines[3].contains("/docs/reference/cli/"));
        assert!(lines[4].contains("└──") && lines[4].contains("Task states"));
    }
}
