use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

use crate::config::PhraseGraphConfig;

/// File name of the cached English word list within the cache directory.
pub const WORDS_FILE: &str = "words.txt";
/// File name of the cached first-names list within the cache directory.
pub const NAMES_FILE: &str = "names.txt";

/// The set of words a phrase may be built from: the union of the English word
/// list and the first-names list, lowercased.
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load the dictionary, downloading the upstream word lists into the cache
    /// directory on first use. Existing cache files are reused without any
    /// network access.
    pub fn load(config: &PhraseGraphConfig) -> anyhow::Result<Self> {
        let cache_dir = config.cache_dir();
        let words_path = cache_dir.join(WORDS_FILE);
        let names_path = cache_dir.join(NAMES_FILE);

        download_file(config.words_url(), &words_path)?;
        download_file(config.names_url(), &names_path)?;

        let mut words = HashSet::new();
        for path in [&words_path, &names_path] {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            for line in contents.lines() {
                let word = line.trim();
                if !word.is_empty() {
                    words.insert(word.to_lowercase());
                }
            }
        }

        Ok(Self { words })
    }

    /// Build a dictionary from an explicit word collection.
    pub fn from_words<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Number of unique words and names loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// A phrase is valid when it has at least one word and every
    /// whitespace-separated word is in the dictionary (case-insensitive).
    pub fn is_valid_phrase(&self, phrase: &str) -> bool {
        let mut parts = phrase.split_whitespace().peekable();
        if parts.peek().is_none() {
            return false;
        }
        parts.all(|part| self.words.contains(&part.to_lowercase()))
    }
}

/// Enforce every word to have an uppercase first letter, and the rest lowercase.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Fetch `url` into `dest` unless the destination already exists.
fn download_file(url: &str, dest: &Path) -> anyhow::Result<()> {
    if dest.exists() {
        return Ok(());
    }

    eprintln!("Downloading {} to {}...", url, dest.display());

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create cache directory {}", parent.display()))?;
        }
    }

    let body = reqwest::blocking::get(url)
        .with_context(|| format!("failed to fetch {url}"))?
        .error_for_status()
        .with_context(|| format!("server error fetching {url}"))?
        .text()
        .with_context(|| format!("failed to read response body from {url}"))?;

    std::fs::write(dest, body)
        .with_context(|| format!("failed to write word list {}", dest.display()))?;

    Ok(())
}
