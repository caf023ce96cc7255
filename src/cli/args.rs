//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Voice actor agency genealogy: lineage classification and hierarchy trees
#[derive(Parser, Debug)]
#[command(name = "keifu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Dataset: JSON file or directory of JSON files (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::AnyPath, env = "KEIFU_DATA_PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the lineage forest as a tree
    Tree,

    /// Classify one agency into its lineage
    Classify {
        /// Agency id
        id: String,
    },

    /// Group agencies per lineage with counts
    Lineages,

    /// Show the lineage palette
    Colors {
        /// Single lineage tag (all tags when omitted)
        tag: Option<String>,
    },

    /// Export the normalized forest as JSON
    Export,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration as TOML
    Show,
}
