//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// docsite: load and validate documentation site descriptors
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new documentation site
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate the descriptor against the content directory
    #[command(visible_alias = "c")]
    Check {
        /// Report duplicate slugs as warnings instead of errors
        #[arg(long, short = 'w')]
        warn_only: bool,
    },

    /// Validate, then write the resolved site manifest as JSON
    #[command(visible_alias = "e")]
    Export {
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Output file (default: stdout)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Validate, then print the resolved sidebar
    #[command(visible_alias = "n")]
    Nav,
}
