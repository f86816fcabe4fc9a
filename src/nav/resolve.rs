//! Expand the sidebar into concrete links.

use crate::config::{GroupKind, NavGroup, SiteInfoConfig};
use crate::content::{ContentStore, label_from_slug};
use serde::Serialize;

/// The sidebar as rendered: every group with its final links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNav {
    pub groups: Vec<ResolvedGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedGroup {
    pub label: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    /// Items were listed from a content directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    pub items: Vec<ResolvedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedItem {
    pub label: String,
    pub slug: String,
    pub href: String,
}

impl ResolvedNav {
    /// Total number of links across all groups.
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Resolve `nav` against `store`.
///
/// Explicit items keep their order and label. Autogenerated groups list the
/// pages under their directory in slug order, labelled by the page title or
/// the humanised last slug segment. Expects a tree that already passed
/// validation; a group with no usable shape resolves to no items.
pub fn resolve_navigation(
    nav: &[NavGroup],
    store: &impl ContentStore,
    site: &SiteInfoConfig,
) -> ResolvedNav {
    let link = |label: String, slug: &str| ResolvedItem {
        href: site.href_for(slug),
        slug: slug.to_string(),
        label,
    };

    let groups = nav
        .iter()
        .map(|group| {
            let (directory, items) = match group.kind() {
                Some(GroupKind::Items(items)) => (
                    None,
                    items
                        .iter()
                        .map(|item| link(item.label.clone(), &item.slug))
                        .collect(),
                ),
                Some(GroupKind::Autogenerate(directory)) => (
                    Some(directory.to_string()),
                    store
                        .list_slugs_under(directory)
                        .iter()
                        .map(|slug| {
                            let label = store.title(slug).unwrap_or_else(|| label_from_slug(slug));
                            link(label, slug)
                        })
                        .collect(),
                ),
                None => (None, Vec::new()),
            };

            ResolvedGroup {
                label: group.label.clone(),
                collapsed: group.collapsed,
                directory,
                items,
            }
        })
        .collect();

    ResolvedNav { groups }
}
