//! Filesystem-backed content store.

use super::{ContentStore, extract_title, is_under, slug_from_path};
use crate::config::ConfigError;
use crate::{debug, log};
use jwalk::WalkDir;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// A page found while scanning.
#[derive(Debug, Clone)]
struct PageEntry {
    path: PathBuf,
    title: Option<String>,
}

/// Pages under a content directory, plus asset lookups against the
/// project root.
#[derive(Debug)]
pub struct FsContentStore {
    root: PathBuf,
    pages: BTreeMap<String, PageEntry>,
}

impl FsContentStore {
    /// Walk `content_dir` and index every page by slug.
    ///
    /// Asset paths are later resolved against `root`.
    pub fn scan(content_dir: &Path, root: &Path) -> Result<Self, ConfigError> {
        if !content_dir.is_dir() {
            return Err(ConfigError::Io(
                content_dir.to_path_buf(),
                io::Error::new(io::ErrorKind::NotFound, "content directory not found"),
            ));
        }

        // Symlinked pages count; entries that cannot be read are skipped
        let mut files: Vec<PathBuf> = WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| {
                entry
                    .inspect_err(|e| log!("warning"; "skipping unreadable content entry: {e}"))
                    .ok()
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let name = e.file_name().to_str().unwrap_or_default();
                !IGNORED_FILES.contains(&name)
            })
            .map(|e| e.path())
            .collect();
        files.sort();

        let mut pages: BTreeMap<String, PageEntry> = BTreeMap::new();
        for path in files {
            let Ok(rel) = path.strip_prefix(content_dir) else {
                continue;
            };
            let Some(slug) = slug_from_path(rel) else {
                continue;
            };

            if let Some(existing) = pages.get(&slug) {
                log!("warning"; "`{}` and `{}` both map to slug `{slug}`, keeping the first",
                    existing.path.display(), path.display());
                continue;
            }

            let content =
                fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
            let title = extract_title(&content);
            debug!("content"; "{slug} <- {}", rel.display());
            pages.insert(slug, PageEntry { path, title });
        }

        Ok(Self {
            root: root.to_path_buf(),
            pages,
        })
    }

    /// Number of pages found.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl ContentStore for FsContentStore {
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
        self.root.join(path).is_file()
    }

    fn title(&self, slug: &str) -> Option<String> {
        self.pages.get(slug).and_then(|p| p.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn setup() -> (TempDir, FsContentStore) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let docs = root.join("src/content/docs");
        write(&docs, "getting-started/introduction.md", "---\ntitle: Introduction\n---\n");
        write(&docs, "features/tasks.mdx", "# Tasks");
        write(&docs, "reference/index.md", "---\ntitle: Reference\n---\n");
        write(&docs, "reference/cli.md", "");
        write(&docs, "reference/.DS_Store", "");
        write(root, "public/favicon.svg", "<svg/>");

        let store = FsContentStore::scan(&docs, root).unwrap();
        (temp, store)
    }

    #[test]
    fn test_scan_indexes_pages() {
        let (_temp, store) = setup();
        assert_eq!(store.len(), 4);
        assert!(store.exists("getting-started/introduction"));
        assert!(store.exists("features/tasks"));
        assert!(store.exists("reference"));
        assert!(!store.exists("getting-started"));
        assert!(store.pages["features/tasks"].path.ends_with("tasks.mdx"));
    }

    #[test]
    fn test_list_slugs_under() {
        let (_temp, store) = setup();
        assert_eq!(store.list_slugs_under("reference"), vec!["reference", "reference/cli"]);
        assert_eq!(store.list_slugs_under("/reference/"), vec!["reference", "reference/cli"]);
        assert!(store.list_slugs_under("guides").is_empty());
    }

    #[test]
    fn test_titles_and_assets() {
        let (_temp, store) = setup();
        assert_eq!(store.title("getting-started/introduction").as_deref(), Some("Introduction"));
        assert_eq!(store.title("features/tasks"), None);
        assert!(store.asset_exists(Path::new("public/favicon.svg")));
        assert!(!store.asset_exists(Path::new("public/logo.svg")));
    }

    #[test]
    fn test_scan_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = FsContentStore::scan(&temp.path().join("missing"), temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_conflicting_slugs_keep_first() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "intro.md", "---\ntitle: First\n---\n");
        write(temp.path(), "intro.mdx", "---\ntitle: Second\n---\n");

        let store = FsContentStore::scan(temp.path(), temp.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.title("intro").as_deref(), Some("First"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_page_is_indexed() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path().join("docs");
        write(temp.path(), "shared/changelog.md", "---\ntitle: Changelog\n---\n");
        fs::create_dir_all(&docs).unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("shared/changelog.md"),
            docs.join("changelog.md"),
        )
        .unwrap();

        let store = FsContentStore::scan(&docs, temp.path()).unwrap();
        assert!(store.exists("changelog"));
        assert_eq!(store.title("changelog").as_deref(), Some("Changelog"));
    }
}
