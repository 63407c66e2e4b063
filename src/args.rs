use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "daily-wordle", version, about = "Guess the five-letter word in six tries")]
pub struct Args {
    /// Vocabulary file, one five-letter word per line
    #[arg(long, value_name = "FILE", conflicts_with = "word_url")]
    pub words: Option<PathBuf>,

    /// Fetch target words from an HTTP word service
    #[arg(long, value_name = "URL")]
    pub word_url: Option<String>,

    /// Statistics database file
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Reject guesses that are not in the vocabulary
    #[arg(long)]
    pub strict: bool,

    /// Print statistics and exit
    #[arg(long)]
    pub stats: bool,

    /// Delete stored statistics and exit
    #[arg(long, conflicts_with = "stats")]
    pub reset_stats: bool,
}
