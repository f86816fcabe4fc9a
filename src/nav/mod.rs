//! Navigation checks against the content store.
//!
//! [`validate_navigation`] enforces that every linked slug is unique and
//! exists; [`resolve_navigation`] expands the tree (autogenerated groups
//! included) into the concrete sidebar.

mod resolve;

pub use resolve::{ResolvedGroup, ResolvedItem, ResolvedNav, resolve_navigation};

use crate::config::section::nav::NAV_FIELD;
use crate::config::{
    ConfigDiagnostics, ConfigError, FieldPath, GroupKind, NavGroup, ReferenceKind, ValidateLevel,
};
use crate::content::ContentStore;
use crate::debug;
use rustc_hash::FxHashMap;

/// Check slug uniqueness and existence across the whole sidebar.
///
/// Duplicates are checked over the complete tree before any content lookup,
/// so a tree that repeats a slug always reports [`ConfigError::DuplicateSlug`]
/// (unless `level` is [`ValidateLevel::Warn`], in which case each repeat is
/// returned as a warning). After that, the first missing slug or empty
/// autogenerate directory fails with [`ConfigError::DanglingReference`].
///
/// Autogenerated entries take part in neither check as individual slugs.
pub fn validate_navigation(
    nav: &[NavGroup],
    store: &impl ContentStore,
    level: ValidateLevel,
) -> Result<ConfigDiagnostics, ConfigError> {
    let mut diag = ConfigDiagnostics::new();

    check_duplicates(nav, level, &mut diag)?;

    for (gi, group) in nav.iter().enumerate() {
        let group_field = NAV_FIELD.index(gi);
        match group.kind() {
            Some(GroupKind::Items(items)) => {
                for (ii, item) in items.iter().enumerate() {
                    if !store.exists(&item.slug) {
                        return Err(ConfigError::DanglingReference {
                            field: item_field(&group_field, ii),
                            kind: ReferenceKind::Page,
                            target: item.slug.clone(),
                        });
                    }
                }
                debug!("nav"; "`{}`: {} items ok", group.label, items.len());
            }
            Some(GroupKind::Autogenerate(directory)) => {
                let pages = store.list_slugs_under(directory);
                if pages.is_empty() {
                    return Err(ConfigError::DanglingReference {
                        field: group_field.join("autogenerate").join("directory"),
                        kind: ReferenceKind::Directory,
                        target: directory.to_string(),
                    });
                }
                debug!("nav"; "`{}`: {} pages under `{directory}`", group.label, pages.len());
            }
            None => {
                let mut malformed = ConfigDiagnostics::new();
                malformed.error_with_hint(
                    group_field,
                    "group must set exactly one of `items` or `autogenerate`",
                    "run `docsite check` for the full list of descriptor problems",
                );
                return Err(ConfigError::Malformed(malformed));
            }
        }
    }

    Ok(diag)
}

fn check_duplicates(
    nav: &[NavGroup],
    level: ValidateLevel,
    diag: &mut ConfigDiagnostics,
) -> Result<(), ConfigError> {
    let mut seen: FxHashMap<&str, FieldPath> = FxHashMap::default();

    for (gi, group) in nav.iter().enumerate() {
        let group_field = NAV_FIELD.index(gi);
        for (ii, item) in group.explicit_items().iter().enumerate() {
            let field = item_field(&group_field, ii);
            match seen.get(item.slug.as_str()) {
                Some(first) => match level {
                    ValidateLevel::Error => {
                        return Err(ConfigError::DuplicateSlug {
                            slug: item.slug.clone(),
                            first: first.clone(),
                            second: field,
                        });
                    }
                    ValidateLevel::Warn => {
                        let message = format!(
                            "slug `{}` is already linked from `{}`",
                            item.slug,
                            first.as_str()
                        );
                        diag.warn(field, message);
                    }
                },
                None => {
                    seen.insert(&item.slug, field);
                }
            }
        }
    }

    Ok(())
}

fn item_field(group_field: &FieldPath, index: usize) -> FieldPath {
    group_field.join("items").index(index).join("slug")
}
