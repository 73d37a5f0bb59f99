use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default location of the word-list cache, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = ".cache";

/// Upstream English word list.
pub const DEFAULT_WORDS_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

/// Upstream first-names list.
pub const DEFAULT_NAMES_URL: &str =
    "https://raw.githubusercontent.com/dominictarr/random-name/master/first-names.txt";

/// Configuration loaded from `phrase-graph.toml` in the working directory.
#[derive(Debug, Deserialize, Default)]
pub struct PhraseGraphConfig {
    /// Directory where downloaded word lists are cached (default: `.cache`).
    pub cache_dir: Option<PathBuf>,
    /// Override URL for the English word list.
    pub words_url: Option<String>,
    /// Override URL for the first-names list.
    pub names_url: Option<String>,
}

impl PhraseGraphConfig {
    /// Load configuration from `phrase-graph.toml` in the given directory.
    ///
    /// Returns a default (empty) configuration if the file does not exist or cannot be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join("phrase-graph.toml");

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("warning: failed to parse phrase-graph.toml: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("warning: failed to read phrase-graph.toml: {err}. Using defaults.");
                Self::default()
            }
        }
    }

    /// The effective word-list cache directory.
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR))
    }

    /// The effective English word list URL.
    pub fn words_url(&self) -> &str {
        self.words_url.as_deref().unwrap_or(DEFAULT_WORDS_URL)
    }

    /// The effective first-names list URL.
    pub fn names_url(&self) -> &str {
        self.names_url.as_deref().unwrap_or(DEFAULT_NAMES_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PhraseGraphConfig::load(dir.path());
        assert_eq!(config.cache_dir(), PathBuf::from(DEFAULT_CACHE_DIR));
        assert_eq!(config.words_url(), DEFAULT_WORDS_URL);
        assert_eq!(config.names_url(), DEFAULT_NAMES_URL);
    }

    #[test]
    fn test_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("phrase-graph.toml"),
            "cache_dir = \"lists\"\nwords_url = \"http://localhost:1234/words.txt\"\n",
        )
        .unwrap();
        let config = PhraseGraphConfig::load(dir.path());
        assert_eq!(config.cache_dir(), PathBuf::from("lists"));
        assert_eq!(config.words_url(), "http://localhost:1234/words.txt");
        assert_eq!(
            config.names_url(),
            DEFAULT_NAMES_URL,
            "unset fields fall back to defaults"
        );
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("phrase-graph.toml"), "cache_dir = [not toml").unwrap();
        let config = PhraseGraphConfig::load(dir.path());
        assert_eq!(config.cache_dir(), PathBuf::from(DEFAULT_CACHE_DIR));
    }
}
