//! Site descriptor management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── content    # [content]
//! │   ├── nav        # [[nav]]
//! │   ├── site       # [site]
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                            |
//! |---------------|----------------------------------------------------|
//! | `[site]`      | Site metadata (url, base, title, assets, social)   |
//! | `[[nav]]`     | Sidebar groups, explicit or autogenerated          |
//! | `[content]`   | Content and public directories                     |
//! | `[validate]`  | Duplicate slug level                               |
//!
//! # Loading
//!
//! Parsing runs in two phases. [`SiteConfig::parse`] turns TOML into a
//! descriptor and collects every structural problem it can see in the text
//! alone. [`SiteConfig::validate_references`] then checks the descriptor
//! against a [`ContentStore`], stopping at the first missing page or asset.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    Autogenerate, ContentConfig, GroupKind, NavGroup, NavItem, SiteInfoConfig, ValidateConfig,
    ValidateLevel,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, FieldPath, ReferenceKind,
};

use crate::content::ContentStore;
use crate::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `docsite.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    pub site: SiteInfoConfig,

    /// Content locations
    #[serde(default)]
    pub content: ContentConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,

    /// Sidebar navigation, in display order
    pub nav: Vec<NavGroup>,
}

impl SiteConfig {
    /// Locate `config_name` upward from `cwd` and load it.
    pub fn load(config_name: &Path, cwd: &Path) -> Result<Self, ConfigError> {
        Self::from_path(&Self::locate(config_name, cwd)?)
    }

    /// Find `config_name` in `cwd` or the nearest ancestor holding one.
    pub fn locate(config_name: &Path, cwd: &Path) -> Result<PathBuf, ConfigError> {
        find_config_file(config_name, cwd).ok_or_else(|| {
            ConfigError::Io(
                cwd.join(config_name),
                io::Error::new(io::ErrorKind::NotFound, "config file not found"),
            )
        })
    }

    /// Load the descriptor at `path`; its parent becomes the project root.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::read(path).map(|(config, _)| config)
    }

    /// Like [`Self::from_path`], but also returns the parse warnings.
    pub fn read(path: &Path) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, diag) = Self::parse(&content)?;
        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!("config"; "loaded {}", path.display());
        Ok((config, diag))
    }

    /// Parse and structurally check a descriptor.
    ///
    /// Returns the collected warnings alongside the config. All structural
    /// errors are returned together as [`ConfigError::Malformed`].
    pub fn parse(content: &str) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.warn(FieldPath::owned(field), "unknown field, ignored");
        }
        config.check(&mut diag);

        if diag.has_errors() {
            return Err(ConfigError::Malformed(diag));
        }
        Ok((config, diag))
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Structural checks that need nothing but the descriptor itself.
    fn check(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate(diag);
        self.content.validate(diag);
        section::nav::validate_nav_shape(&self.nav, diag);
    }

    /// Re-serialise the descriptor as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute content directory.
    pub fn content_dir(&self) -> PathBuf {
        self.root_join(&self.content.dir)
    }

    /// Favicon path relative to the project root (`/favicon.svg` -> `public/favicon.svg`).
    pub fn favicon_path(&self) -> Option<PathBuf> {
        let favicon = self.site.favicon.as_deref()?;
        let favicon = favicon.strip_prefix("/").unwrap_or(favicon);
        Some(self.content.public.join(favicon))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Check every reference in the descriptor against `store`.
    ///
    /// Assets (logo, favicon, stylesheets in order) are checked first, then
    /// the navigation. The first failure is returned; warnings (such as
    /// duplicate slugs at the `warn` level) come back on success.
    pub fn validate_references(
        &self,
        store: &impl ContentStore,
    ) -> Result<ConfigDiagnostics, ConfigError> {
        let fields = &SiteInfoConfig::FIELDS;

        let assets = self
            .site
            .logo
            .iter()
            .map(|logo| (fields.logo.clone(), logo.clone()))
            .chain(self.favicon_path().map(|p| (fields.favicon.clone(), p)))
            .chain(
                self.site
                    .stylesheets
                    .iter()
                    .enumerate()
                    .map(|(i, css)| (fields.stylesheets.index(i), css.clone())),
            );

        for (field, path) in assets {
            if !store.asset_exists(&path) {
                return Err(ConfigError::DanglingReference {
                    field,
                    kind: ReferenceKind::Asset,
                    target: path.display().to_string(),
                });
            }
        }

        crate::nav::validate_navigation(&self.nav, store, self.validate.duplicate_slugs)
    }
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    /// Parse a descriptor, dropping warnings. Use [`SiteConfig::parse`] to keep them.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content).map(|(config, _)| config)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    // Top-level keys must precede the first table header
    let nav = if extra.contains("[[nav]]") { "" } else { "nav = []\n" };
    let config =
        format!("{nav}[site]\nurl = \"https://example.org\"\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
