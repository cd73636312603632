use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "corpus-search")]
#[command(about = "TF-IDF vector-space search over a directory of plain-text documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a fresh index from a corpus directory and persist it.
    Build {
        #[arg(short, long)]
        corpus: Option<PathBuf>,
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Alias for `build`, named to mirror the §6.4 re-index trigger.
    Rebuild {
        #[arg(short, long)]
        corpus: Option<PathBuf>,
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Run one query against a previously built index.
    Search {
        query: String,
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Raw string, not `usize`: §6.3 requires a non-integer value to
        /// fall back to the default 10 rather than be rejected outright.
        #[arg(short = 'k', long = "top-k")]
        top_k: Option<String>,
        #[arg(long)]
        spelling: bool,
        #[arg(long)]
        synonyms: bool,
        #[arg(long)]
        soundex: bool,
    },
}
