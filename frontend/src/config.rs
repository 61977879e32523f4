use clap::{Parser, Subcommand};
use std::path::PathBuf;
use backend::config::{StoreConfig, DEFAULT_BACKUP_FILE, DEFAULT_DATA_FILE};
use shared::models::Candidate;

#[derive(Parser, Debug, Clone)]
#[command(name = "voting-app", about = "Record and tally a two-candidate vote")]
pub struct Opts {
    #[arg(long = "data-file", env = "VOTE_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    #[arg(long = "backup-file", env = "VOTE_BACKUP_FILE", default_value = DEFAULT_BACKUP_FILE)]
    pub backup_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// Prompt for votes until `quit` or end of input
    #[default]
    Interactive,
    /// Record a single vote
    Vote {
        #[arg(long)]
        id: String,
        #[arg(long)]
        candidate: Candidate,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print the current tally
    Tally {
        #[arg(long)]
        json: bool,
    },
    /// Print every recorded row
    List,
    /// Erase every recorded vote
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Show file locations and whether the mirror matches
    Status,
}

impl Opts {
    pub fn from_args() -> Self {
        Opts::parse()
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_file, &self.backup_file)
    }
}
