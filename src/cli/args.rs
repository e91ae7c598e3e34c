//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Hierarchical container and looting engine: weight/capacity accounting with first-fit placement
#[derive(Parser, Debug)]
#[command(name = "lootbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding the catalog CSV files (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog: items, then containers
    List,

    /// Render one catalog entry with its contents
    Show {
        /// Name of the catalog entry
        name: String,
    },

    /// Show container masters as trees
    Tree {
        /// Single entry to show (default: all containers)
        name: Option<String>,
    },

    /// Loot items into a copy of a container
    Loot {
        /// Name of the container to loot into
        container: String,

        /// Item to loot (repeatable); omit for the interactive menu
        #[arg(short, long = "item")]
        items: Vec<String>,
    },

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

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init,
}
