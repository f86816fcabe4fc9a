//! `[[nav]]` sidebar groups.
//!
//! Each group is either an explicit, ordered list of links or an instruction
//! to list every page under a content directory.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! label = "Getting Started"
//! items = [
//!     { label = "Introduction", slug = "getting-started/introduction" },
//!     { label = "Installation", slug = "getting-started/installation" },
//! ]
//!
//! [[nav]]
//! label = "Reference"
//! collapsed = true
//! autogenerate = { directory = "reference" }
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Field path of the navigation array.
pub const NAV_FIELD: FieldPath = FieldPath::new("nav");

/// A labelled sidebar group.
///
/// Exactly one of `items` / `autogenerate` must be set; [`NavGroup::kind`]
/// exposes the group once the descriptor passed [`validate_nav_shape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavGroup {
    pub label: String,

    /// Render the group folded.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autogenerate: Option<Autogenerate>,
}

/// A single sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// Content slug, e.g. `getting-started/introduction`.
    pub slug: String,
}

/// Build a group from every page under `directory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autogenerate {
    pub directory: String,
}

/// The two shapes a group can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind<'a> {
    Items(&'a [NavItem]),
    Autogenerate(&'a str),
}

impl NavGroup {
    /// Explicit group of links.
    pub fn with_items(label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            collapsed: false,
            items: Some(items),
            autogenerate: None,
        }
    }

    /// Group generated from a content directory.
    pub fn autogenerated(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            collapsed: false,
            items: None,
            autogenerate: Some(Autogenerate {
                directory: directory.into(),
            }),
        }
    }

    /// Shape of this group. `None` when both or neither variant is set.
    pub fn kind(&self) -> Option<GroupKind<'_>> {
        match (&self.items, &self.autogenerate) {
            (Some(items), None) => Some(GroupKind::Items(items)),
            (None, Some(auto)) => Some(GroupKind::Autogenerate(&auto.directory)),
            _ => None,
        }
    }

    /// Explicit items, empty for autogenerated groups.
    pub fn explicit_items(&self) -> &[NavItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

impl NavItem {
    pub fn new(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slug: slug.into(),
        }
    }
}

/// Check the structural shape of the sidebar.
///
/// Content existence and slug uniqueness are checked later against the
/// content store; this only looks at the descriptor text.
pub fn validate_nav_shape(nav: &[NavGroup], diag: &mut ConfigDiagnostics) {
    if nav.is_empty() {
        diag.warn(NAV_FIELD, "navigation is empty, the sidebar will have no entries");
    }

    for (gi, group) in nav.iter().enumerate() {
        let group_field = NAV_FIELD.index(gi);

        if group.label.trim().is_empty() {
            diag.error(group_field.join("label"), "group label must not be empty");
        }

        match group.kind() {
            Some(GroupKind::Items(items)) => {
                if items.is_empty() {
                    diag.warn(group_field.join("items"), "group has no items");
                }
                validate_items(items, &group_field, diag);
            }
            Some(GroupKind::Autogenerate(directory)) => {
                if let Err(message) = check_slug(directory) {
                    diag.error(group_field.join("autogenerate").join("directory"), message);
                }
            }
            None if group.items.is_some() => diag.error_with_hint(
                group_field,
                "group sets both `items` and `autogenerate`",
                "keep one of them; split into two groups if both are wanted",
            ),
            None => diag.error_with_hint(
                group_field,
                "group needs `items` or `autogenerate`",
                "add items = [{ label = \"...\", slug = \"...\" }]",
            ),
        }
    }
}

fn validate_items(items: &[NavItem], group_field: &FieldPath, diag: &mut ConfigDiagnostics) {
    let mut labels: Vec<&str> = Vec::with_capacity(items.len());

    for (ii, item) in items.iter().enumerate() {
        let item_field = group_field.join("items").index(ii);
        let label = item.label.trim();

        if label.is_empty() {
            diag.error(item_field.join("label"), "item label must not be empty");
        } else if labels.contains(&label) {
            diag.warn(
                item_field.join("label"),
                format!("label `{label}` appears twice in this group"),
            );
        } else {
            labels.push(label);
        }

        if let Err(message) = check_slug(&item.slug) {
            diag.error_with_hint(
                item_field.join("slug"),
                message,
                "slugs look like `getting-started/introduction`",
            );
        }
    }
}

/// Check that a string is a well-formed content slug.
pub fn check_slug(slug: &str) -> Result<(), String> {
    if slug.is_empty() {
        return Err("slug must not be empty".into());
    }
    if slug.starts_with('/') || slug.ends_with('/') {
        return Err(format!("slug `{slug}` must not start or end with `/`"));
    }
    if slug.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
        return Err(format!("slug `{slug}` has an empty or relative segment"));
    }
    if slug.contains(|c: char| c.is_whitespace() || matches!(c, '#' | '?' | '\\')) {
        return Err(format!("slug `{slug}` contains a character not allowed in paths"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_kind() {
        let group = NavGroup::with_items("A", vec![NavItem::new("x", "a/x")]);
        assert!(matches!(group.kind(), Some(GroupKind::Items(items)) if items.len() == 1));

        let group = NavGroup::autogenerated("B", "reference");
        assert_eq!(group.kind(), Some(GroupKind::Autogenerate("reference")));
        assert!(group.explicit_items().is_empty());

        let mut both = NavGroup::autogenerated("C", "reference");
        both.items = Some(Vec::new());
        assert_eq!(both.kind(), None);
    }

    #[test]
    fn test_shape_errors() {
        let mut both = NavGroup::autogenerated("Both", "reference");
        both.items = Some(Vec::new());
        let neither = NavGroup {
            label: "Neither".into(),
            collapsed: false,
            items: None,
            autogenerate: None,
        };
        let bad_slug = NavGroup::with_items("", vec![NavItem::new("Intro", "/intro/")]);

        let mut diag = ConfigDiagnostics::new();
        validate_nav_shape(&[both, neither, bad_slug], &mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["nav[0]", "nav[1]", "nav[2].label", "nav[2].items[0].slug"]
        );
    }

    #[test]
    fn test_duplicate_label_warns() {
        let group = NavGroup::with_items(
            "Features",
            vec![
                NavItem::new("Tasks", "features/tasks"),
                NavItem::new("Tasks", "features/task-lists"),
            ],
        );
        let mut diag = ConfigDiagnostics::new();
        validate_nav_shape(&[group], &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].0.as_str(), "nav[0].items[1].label");
    }

    #[test]
    fn test_check_slug() {
        assert!(check_slug("getting-started/introduction").is_ok());
        assert!(check_slug("index").is_ok());
        assert!(check_slug("").is_err());
        assert!(check_slug("a//b").is_err());
        assert!(check_slug("../secrets").is_err());
        assert!(check_slug("a b").is_err());
    }
}
