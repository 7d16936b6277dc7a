// File: src/config.rs
use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_min_token_chars() -> usize {
    2
}

/// Which characters count as "word" characters for boundary checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordChars {
    /// `[A-Za-z0-9_]`, the conventional regex `\w` class.
    #[default]
    Ascii,
    /// Any alphanumeric character plus `_`.
    Unicode,
}

impl WordChars {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ascii" => Some(WordChars::Ascii),
            "unicode" => Some(WordChars::Unicode),
            _ => None,
        }
    }

    pub fn is_word_char(self, c: char) -> bool {
        match self {
            WordChars::Ascii => c.is_ascii_alphanumeric() || c == '_',
            WordChars::Unicode => c.is_alphanumeric() || c == '_',
        }
    }
}

/// Tuning for the free-text search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Tokens with fewer characters are never used as trigger words.
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
    pub word_chars: WordChars,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_token_chars: default_min_token_chars(),
            word_chars: WordChars::default(),
        }
    }
}

impl MatcherConfig {
    /// Defaults overridden by `GREETINGS_MIN_TOKEN_CHARS` and `GREETINGS_WORD_CHARS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let min_token_chars = env::var("GREETINGS_MIN_TOKEN_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_token_chars);

        let word_chars = env::var("GREETINGS_WORD_CHARS")
            .ok()
            .and_then(|v| WordChars::parse(&v))
            .unwrap_or(defaults.word_chars);

        Self {
            min_token_chars,
            word_chars,
        }
    }
}

/// Where the dictionary comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory of `*.json` language files. `None` means the embedded dictionary.
    pub data_dir: Option<PathBuf>,
    /// Binary snapshot to read from, or write after a fresh load.
    pub snapshot: Option<PathBuf>,
}

impl LoaderConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("GREETINGS_DATA_DIR").map(PathBuf::from),
            snapshot: env::var_os("GREETINGS_SNAPSHOT").map(PathBuf::from),
        }
    }
}
