//! docsite: loads a documentation site's `docsite.toml`, checks it against
//! the content on disk, and hands the resolved site to a generator.
//!
//! ```ignore
//! let config = SiteConfig::load(Path::new("docsite.toml"), &cwd)?;
//! let store = FsContentStore::scan(&config.content_dir(), &config.root)?;
//! config.validate_references(&store)?;
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod logger;
pub mod manifest;
pub mod nav;
mod utils;

pub use config::{ConfigError, ErrorKind, SiteConfig};
pub use content::{ContentStore, FsContentStore, MemoryContentStore};
pub use nav::{resolve_navigation, validate_navigation};
