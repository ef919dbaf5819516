use std::path::PathBuf;

use clap::Subcommand;

use crate::formats::tables::TableKind;

pub mod add;
pub mod merge;

#[derive(Subcommand)]
pub enum Commands {
    /// Merge mod table files into a mission table
    Merge {
        /// Mission table file to merge into (created if missing)
        #[arg(short, long)]
        destination: PathBuf,

        /// Mod table files to merge, in order
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Which table kind the files are (types, events, spawnabletypes)
        #[arg(short, long, default_value = "types")]
        table: TableKind,

        /// Replace existing entries instead of skipping them
        #[arg(long)]
        overwrite: bool,

        /// Only print the final summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Add synthesized entries for new classnames to mission tables
    Add {
        /// JSON file with classname lists, e.g.
        /// {"weapons": ["AKM"], "vehicles": [], "items": []}
        #[arg(short, long)]
        items: PathBuf,

        /// Destination types.xml
        #[arg(long)]
        types: PathBuf,

        /// Destination cfgeventspawns.xml; vehicle classnames also gain a
        /// spawn event when this is given
        #[arg(long)]
        events: Option<PathBuf>,

        /// Configuration file with default profiles (defaults used if absent)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only print the final summary
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the command fails.
    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            Commands::Merge {
                destination,
                sources,
                table,
                overwrite,
                quiet,
            } => merge::run(&destination, &sources, table, overwrite, quiet),
            Commands::Add {
                items,
                types,
                events,
                config,
                quiet,
            } => add::run(&items, &types, events.as_deref(), config.as_deref(), quiet),
        }
    }
}
