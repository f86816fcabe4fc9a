//! Site initialization module.
//!
//! Creates new site structure with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::log;
use anyhow::{Context, Result};
use std::path::Path;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure and the first page
/// 3. Write docsite.toml
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    create_site(&root, mode)?;
    log!("init"; "site initialized at {}", root.display());
    Ok(())
}

/// Validate `root` and write the starter site into it.
pub fn create_site(root: &Path, mode: InitMode) -> Result<()> {
    validate::validate_target(root, mode)?;
    structure::create_structure(root)?;
    config::write_config(root)
}
