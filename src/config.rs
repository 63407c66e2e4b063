//! Runtime configuration resolved from command-line flags.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::{
    args::Args,
    db,
    wordlist::{RemoteWordSource, VocabularyWordSource, WordSource},
};

const APP_DIR: &str = "daily-wordle";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceConfig {
    Embedded,
    File(PathBuf),
    Remote(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub word_source: WordSourceConfig,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub strict: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let word_source = match (&args.words, &args.word_url) {
            (Some(path), _) => WordSourceConfig::File(path.clone()),
            (None, Some(url)) => WordSourceConfig::Remote(url.clone()),
            (None, None) => WordSourceConfig::Embedded,
        };

        let db_path = match &args.db {
            Some(path) => path.clone(),
            None => db::get_db_path()?,
        };

        let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);

        Ok(Self {
            word_source,
            db_path,
            log_dir,
            log_level: args.log_level.clone(),
            strict: args.strict,
        })
    }

    /// Builds the configured word source. An unusable vocabulary is fatal.
    pub fn build_word_source(&self) -> Result<Box<dyn WordSource>> {
        let source: Box<dyn WordSource> = match &self.word_source {
            WordSourceConfig::Embedded => Box::new(VocabularyWordSource::embedded()?),
            WordSourceConfig::File(path) => Box::new(
                VocabularyWordSource::from_file(path).context("failed to load vocabulary")?,
            ),
            WordSourceConfig::Remote(url) => Box::new(RemoteWordSource::new(url.clone())?),
        };
        Ok(source)
    }
}

fn default_log_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR).join("logs"),
        None => PathBuf::from("logs"),
    }
}
