//! Command-line interface module.

mod args;
pub mod check;
mod common;
pub mod export;
pub mod init;
pub mod nav;

pub use args::{Cli, Commands};

use anyhow::Result;

/// Run the parsed command.
pub fn run(cli: &Cli) -> Result<()> {
    crate::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => init::new_site(name.as_deref(), *dry),
        Commands::Check { warn_only } => check::check_site(cli, *warn_only),
        Commands::Export { pretty, output } => {
            export::export_manifest(cli, *pretty, output.as_deref())
        }
        Commands::Nav => nav::print_nav(cli),
    }
}
