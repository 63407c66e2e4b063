use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::word::Word;

/// Vocabulary shipped with the game.
pub static DEFAULT_WORDS: Lazy<Vec<Word>> =
    Lazy::new(|| parse_word_list(include_str!("../data/words.txt"), "embedded list"));

/// Supplies target words and decides which guesses are real words.
pub trait WordSource {
    fn next_word(&self) -> Result<Word>;
    fn is_valid_word(&self, candidate: &str) -> bool;
}

/// Parses one word per line. Blank lines and `#` comments are skipped;
/// anything that is not a five-letter word is logged and dropped.
pub fn parse_word_list(text: &str, origin: &str) -> Vec<Word> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::parse(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping {:?} from {}: {}", line, origin, e);
                None
            }
        })
        .collect()
}

pub fn load_words(path: &Path) -> Result<Vec<Word>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read wordlist {}", path.display()))?;

    Ok(parse_word_list(&text, &path.display().to_string()))
}

/// Picks targets uniformly at random from a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct VocabularyWordSource {
    words: Vec<Word>,
    lookup: HashSet<Word>,
}

impl VocabularyWordSource {
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(anyhow::anyhow!("vocabulary is empty"));
        }

        let lookup = words.iter().copied().collect();
        Ok(Self { words, lookup })
    }

    pub fn embedded() -> Result<Self> {
        Self::new(DEFAULT_WORDS.clone())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let words = load_words(path)?;
        Self::new(words).with_context(|| format!("no usable words in {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for VocabularyWordSource {
    fn next_word(&self) -> Result<Word> {
        self.words
            .choose(&mut rand::rng())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("failed to select random word"))
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        Word::parse(candidate)
            .map(|word| self.lookup.contains(&word))
            .unwrap_or(false)
    }
}

#[derive(Debug, Deserialize)]
struct WordResponse {
    word: String,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    is_valid: bool,
}

/// Word service reached over HTTP.
///
/// `GET {url}` answers `{"word": "..."}`; `POST {url}` with `{"word": "..."}`
/// answers `{"isValid": bool}`.
#[derive(Debug, Clone)]
pub struct RemoteWordSource {
    client: Client,
    url: String,
}

impl RemoteWordSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    fn validate(&self, candidate: &str) -> Result<bool> {
        let body = serde_json::to_string(&ValidateRequest { word: candidate })?;
        let text = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?
            .error_for_status()?
            .text()?;

        let response: ValidateResponse =
            serde_json::from_str(&text).context("unexpected validation response")?;
        Ok(response.is_valid)
    }
}

impl WordSource for RemoteWordSource {
    fn next_word(&self) -> Result<Word> {
        debug!("Fetching word from {}", self.url);
        let text = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("failed to reach {}", self.url))?
            .error_for_status()?
            .text()?;

        let response: WordResponse =
            serde_json::from_str(&text).context("unexpected word response")?;
        Word::parse(&response.word)
            .with_context(|| format!("word service returned {:?}", response.word))
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        match self.validate(candidate) {
            Ok(valid) => valid,
            Err(e) => {
                warn!("Word validation failed for {:?}: {:#}", candidate, e);
                false
            }
        }
    }
}
