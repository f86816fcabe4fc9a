//! Content store: which pages and assets exist.
//!
//! The descriptor only names pages by slug; the store answers whether those
//! slugs (and the logo/favicon/stylesheet files) are really there.
//!
//! | Module   | Purpose                                          |
//! |----------|--------------------------------------------------|
//! | `fs`     | [`FsContentStore`], scans a content directory    |
//! | `memory` | [`MemoryContentStore`], slugs held in memory     |
//! | `meta`   | Front-matter title extraction                    |

mod fs;
mod memory;
mod meta;

pub use fs::FsContentStore;
pub use memory::MemoryContentStore;
pub use meta::extract_title;

use std::path::{Component, Path};

/// File extensions recognised as pages.
pub const PAGE_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Query interface over the content collaborator.
pub trait ContentStore {
    /// Whether a page with this slug exists.
    fn exists(&self, slug: &str) -> bool;

    /// All page slugs equal to `directory` or below it, sorted.
    fn list_slugs_under(&self, directory: &str) -> Vec<String>;

    /// Whether an asset path (relative to the project root) exists.
    fn asset_exists(&self, path: &Path) -> bool;

    /// Page title, if the page declares one.
    fn title(&self, _slug: &str) -> Option<String> {
        None
    }
}

/// Whether `slug` is `directory` itself or lives below it.
pub fn is_under(slug: &str, directory: &str) -> bool {
    slug == directory
        || slug
            .strip_prefix(directory)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Derive a slug from a page path relative to the content directory.
///
/// `Getting Started/Introduction.md` -> `getting-started/introduction`,
/// `What's New.md` -> `whats-new`, `guides/index.md` -> `guides`,
/// `index.md` -> `index`. Returns `None` for non-page files.
pub fn slug_from_path(rel: &Path) -> Option<String> {
    let ext = rel.extension()?.to_str()?;
    if !PAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return None;
    }

    let mut segments: Vec<String> = rel
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(normalize_segment(&s.to_string_lossy())),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() > 1 && segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}

/// Lower-case, keep only alphanumerics, `-` and `_`, and join words with `-`.
fn normalize_segment(segment: &str) -> String {
    segment
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Fallback label for a page without a title: last slug segment, humanised.
///
/// `getting-started/first_steps` -> `First steps`
pub fn label_from_slug(slug: &str) -> String {
    let last = slug.rsplit('/').next().unwrap_or(slug);
    let words = last.replace(['-', '_'], " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
