//! In-memory content store, for programmatic use and tests.

use super::{ContentStore, is_under};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Content store backed by explicit slug and asset sets.
///
/// ```ignore
/// let store = MemoryContentStore::new()
///     .with_page("getting-started/introduction")
///     .with_asset("public/favicon.svg");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    pages: BTreeMap<String, Option<String>>,
    assets: BTreeSet<PathBuf>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, slug: impl Into<String>) -> Self {
        self.pages.insert(slug.into(), None);
        self
    }

    pub fn with_titled_page(mut self, slug: impl Into<String>, title: impl Into<String>) -> Self {
        self.pages.insert(slug.into(), Some(title.into()));
        self
    }

    pub fn with_asset(mut self, path: impl Into<PathBuf>) -> Self {
        self.assets.insert(path.into());
        self
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryContentStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with_page)
    }
}

impl ContentStore for MemoryContentStore {
    fn exists(&self, slug: &str) -> bool {
        self.pages.contains_key(slug)
    }

    fn list_slugs_under(&self, directory: &str) -> Vec<String> {
        let directory = directory.trim_matches('/');
        self.pages
            .keys()
            .filter(|slug| is_under(slug, directory))
            .cloned()
            .collect()
    }

    fn asset_exists(&self, path: &Path) -> bool {
        self.assets.contains(path)
    }

    fn title(&self, slug: &str) -> Option<String> {
        self.pages.get(slug).cloned().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryContentStore::new()
            .with_titled_page("guides/setup", "Setup")
            .with_page("guides/deploy")
            .with_page("faq")
            .with_asset("public/logo.svg");

        assert!(store.exists("faq"));
        assert!(!store.exists("guides"));
        assert_eq!(store.list_slugs_under("guides"), vec!["guides/deploy", "guides/setup"]);
        assert_eq!(store.title("guides/setup").as_deref(), Some("Setup"));
        assert_eq!(store.title("faq"), None);
        assert!(store.asset_exists(Path::new("public/logo.svg")));
    }

    #[test]
    fn test_from_iter() {
        let store: MemoryContentStore = ["a", "b/c"].into_iter().collect();
        assert!(store.exists("b/c"));
        assert_eq!(store.list_slugs_under("b"), vec!["b/c"]);
    }
}
