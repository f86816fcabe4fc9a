//! Pre-initialization validation.
//!
//! Validates target directory state before site creation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `docsite init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `docsite init <name>` - create new subdirectory (must not exist, or be empty)
    NewDir,
}

/// Validate target directory for initialization.
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    if is_empty(root)? {
        return Ok(());
    }

    match mode {
        InitMode::CurrentDir => bail!(
            "Current directory is not empty.\n\
             Use `docsite init <name>` to create in a new subdirectory."
        ),
        InitMode::NewDir => bail!(
            "Directory '{}' already exists and is not empty.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        ),
    }
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    if !path.is_dir() {
        return Ok(false);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir_is_accepted() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
        assert!(validate_target(temp.path(), InitMode::NewDir).is_ok());
    }

    #[test]
    fn test_non_empty_dir_is_refused() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.md"), "content").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_err());

        let err = validate_target(temp.path(), InitMode::NewDir).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_missing_dir_is_accepted() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        assert!(validate_target(&new_path, InitMode::NewDir).is_ok());
    }
}
