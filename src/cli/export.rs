//! `docsite export`: write the resolved manifest.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::{Cli, common::Project};
use crate::log;
use crate::manifest::Manifest;
use crate::utils::plural_count;

/// Validate, then print or write the JSON manifest.
pub fn export_manifest(cli: &Cli, pretty: bool, output: Option<&Path>) -> Result<()> {
    let project = Project::load(cli)?;
    project.validate()?;

    let manifest = Manifest::new(&project.config, &project.store);
    let mut json = manifest
        .to_json(pretty)
        .context("Failed to serialize manifest")?;
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write manifest '{}'", path.display()))?;
            log!(
                "export";
                "wrote {} ({})",
                path.display(),
                plural_count(manifest.sidebar.link_count(), "link")
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("Failed to write manifest to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
