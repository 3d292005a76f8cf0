use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use item_registry::DEFAULT_NAMESPACE;
use std::path::PathBuf;

/// CLI arguments for item-registry
#[derive(Parser, Debug)]
#[command(name = "item-registry")]
#[command(about = "Bootstrap and inspect item icon and property registries")]
pub struct Cli {
    /// Directory holding the JSON settings store
    #[arg(long, default_value = ".")]
    pub store: PathBuf,

    /// Settings namespace the registries live under
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Populate registries that have never been initialized
    Bootstrap {
        /// Host system identifier (e.g. "dnd5e")
        #[arg(long)]
        host: String,

        /// JSON overlay file contributing registry entries (repeatable)
        #[arg(long = "overlay")]
        overlays: Vec<PathBuf>,

        /// Directory of JSON overlay files, loaded in file name order
        #[arg(long)]
        overlay_dir: Option<PathBuf>,
    },

    /// Print a stored registry as JSON
    Show {
        #[arg(value_enum)]
        registry: RegistryArg,

        /// Glob filter: field paths for properties, categories for icons
        #[arg(short, long)]
        query: Vec<String>,
    },

    /// Show or change the players welcome screen toggle
    Welcome {
        /// New value (true or false)
        #[arg(long)]
        set: Option<bool>,
    },

    /// List host systems with built-in defaults
    Hosts,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryArg {
    Icons,
    Properties,
}
