use crate::config::MatcherConfig;
use crate::core::boundary::contains_bounded;
use crate::core::registry::LanguageRegistry;
use crate::core::trie::PhraseTrie;
use crate::core::types::{GreetingMatch, GreetingRef, Language, LanguageId};
use std::collections::HashSet;
use std::time::Instant;

/// The query engine. Built once from a fully loaded dictionary and
/// immutable afterwards, so a shared `&GreetingIndex` can serve any number
/// of threads without locking.
pub struct GreetingIndex {
    registry: LanguageRegistry,
    trie: PhraseTrie<GreetingRef>,
    /// Lowercased phrase of every greeting, same shape as the registry.
    folded: Vec<Vec<String>>,
    config: MatcherConfig,
}

impl GreetingIndex {
    pub fn build(languages: Vec<Language>) -> Self {
        Self::with_config(languages, MatcherConfig::default())
    }

    /// Indexes every greeting under its lowercased phrase.
    pub fn with_config(languages: Vec<Language>, config: MatcherConfig) -> Self {
        let started = Instant::now();
        let mut trie = PhraseTrie::new();
        let mut folded = Vec::with_capacity(languages.len());

        for (language_id, language) in languages.iter().enumerate() {
            let mut keys = Vec::with_capacity(language.greetings.len());
            for (slot, greeting) in language.greetings.iter().enumerate() {
                let key = greeting.phrase.to_lowercase();
                let handle = GreetingRef {
                    language: language_id,
                    slot,
                };
                trie.insert(&key, handle);
                keys.push(key);
            }
            folded.push(keys);
        }

        tracing::info!(
            languages = languages.len(),
            greetings = trie.len(),
            nodes = trie.node_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Built greeting index"
        );

        Self {
            registry: LanguageRegistry::new(languages),
            trie,
            folded,
            config,
        }
    }

    fn resolve(&self, handle: GreetingRef) -> GreetingMatch<'_> {
        let language = &self.registry.as_slice()[handle.language];
        GreetingMatch {
            language,
            greeting: &language.greetings[handle.slot],
            handle,
        }
    }

    fn key(&self, handle: GreetingRef) -> &str {
        &self.folded[handle.language][handle.slot]
    }

    /// All greetings whose phrase starts with `text`, ignoring case.
    /// The input is not trimmed. An empty input matches nothing.
    pub fn match_greetings(&self, text: &str) -> Vec<GreetingMatch<'_>> {
        if text.is_empty() {
            return vec![];
        }
        self.trie
            .lookup_prefix(&text.to_lowercase())
            .into_iter()
            .map(|&handle| self.resolve(handle))
            .collect()
    }

    /// All greetings whose phrase equals `text`, ignoring case. No trimming.
    pub fn find_greetings(&self, text: &str) -> Vec<GreetingMatch<'_>> {
        let wanted = text.to_lowercase();
        self.match_greetings(text)
            .into_iter()
            .filter(|m| m.greeting.phrase.to_lowercase() == wanted)
            .collect()
    }

    pub fn is_greeting(&self, text: &str) -> bool {
        !self.find_greetings(text).is_empty()
    }

    /// Whether `text` contains a known greeting as a whole word or phrase.
    pub fn has_greeting(&self, text: &str) -> bool {
        !self.scan(text, true).is_empty()
    }

    /// Every greeting found in `text` as a whole word or phrase, grouped by
    /// phrase in the order the phrases were found.
    pub fn find_in_text(&self, text: &str) -> Vec<GreetingMatch<'_>> {
        self.scan(text, false)
            .into_iter()
            .flat_map(|key| self.trie.get(key).iter())
            .map(|&handle| self.resolve(handle))
            .collect()
    }

    // Two passes: each word of the text pulls candidate phrases out of the
    // trie by prefix, then each distinct candidate is checked against the
    // whole text with word boundaries on both ends.
    fn scan(&self, text: &str, stop_at_first: bool) -> Vec<&str> {
        let normalized = normalize_text(text);
        let mut seen: HashSet<&str> = HashSet::new();
        let mut hits = Vec::new();

        for word in normalized.split(' ') {
            if word.is_empty() || word.chars().count() < self.config.min_token_chars {
                continue;
            }
            for &handle in self.trie.lookup_prefix(word) {
                let key = self.key(handle);
                if !seen.insert(key) {
                    continue;
                }
                let found = contains_bounded(&normalized, key, self.config.word_chars);
                tracing::trace!(trigger = word, candidate = key, found, "checked candidate");
                if found {
                    hits.push(key);
                    if stop_at_first {
                        return hits;
                    }
                }
            }
        }
        hits
    }

    /// Case-insensitive language lookup, `None` when absent.
    pub fn get_language(&self, name: &str) -> Option<&Language> {
        self.registry.get(name)
    }

    pub fn language(&self, id: LanguageId) -> Option<&Language> {
        self.registry.by_id(id)
    }

    pub fn languages(&self) -> &[Language] {
        self.registry.as_slice()
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Number of indexed greetings.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }
}

/// Collapses whitespace runs to one space, trims, lowercases.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
