// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Position of a language in load order. Greetings refer back to their
/// language through this handle instead of a pointer.
pub type LanguageId = usize;

/// A single greeting phrase of one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub phrase: String,
    /// Language-specific fields (pronunciation, script, notes...), kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Greeting {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Convenience accessor for string-valued extra fields.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }
}

/// A named collection of greetings. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub greetings: Vec<Greeting>,
}

impl Language {
    pub fn new(name: impl Into<String>, greetings: Vec<Greeting>) -> Self {
        Self {
            name: name.into(),
            greetings,
        }
    }
}

/// Handle to one greeting: (owning language, position in its list).
/// This is the value stored in the phrase trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GreetingRef {
    pub language: LanguageId,
    pub slot: usize,
}

/// A resolved query result: the greeting together with its language.
#[derive(Debug, Clone, Copy)]
pub struct GreetingMatch<'a> {
    pub language: &'a Language,
    pub greeting: &'a Greeting,
    pub handle: GreetingRef,
}

impl<'a> GreetingMatch<'a> {
    pub fn phrase(&self) -> &'a str {
        &self.greeting.phrase
    }

    pub fn language_name(&self) -> &'a str {
        &self.language.name
    }
}

impl PartialEq for GreetingMatch<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for GreetingMatch<'_> {}
