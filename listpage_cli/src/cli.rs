use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the listpage CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "listpage")]
#[command(version, about = "Inspect list page filter configurations.")]
pub struct ListpageCli {
    /// Path to the facet catalog JSON file.
    #[arg(short, long, global = true, env = "LISTPAGE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Path to the contextual field map JSON file.
    #[arg(short = 'm', long, global = true, env = "LISTPAGE_FIELD_MAP")]
    pub field_map: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: ListpageCommand,
}

/// Defines the available subcommands of the listpage CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum ListpageCommand {
    /// Summarize the default values and contextual filters of a configuration.
    Summary {
        /// List page configuration JSON file
        config: PathBuf,
    },
    /// Resolve the contextual filters of a configuration against an entity.
    Resolve {
        /// List page configuration JSON file
        config: PathBuf,
        /// Entity JSON file the list page is viewed on (none if not given)
        #[arg(short, long)]
        entity: Option<PathBuf>,
    },
    /// Run a configuration's filters against an index of entities.
    Search {
        /// List page configuration JSON file
        config: PathBuf,
        /// Index JSON file with the entities to search
        #[arg(short, long)]
        index: PathBuf,
        /// Entity JSON file the list page is viewed on (none if not given)
        #[arg(short, long)]
        entity: Option<PathBuf>,
        /// Fulltext search keys
        #[arg(short, long)]
        keys: Option<String>,
    },
}
