// File: src/core/registry.rs
use crate::core::types::{Language, LanguageId};

/// Flat list of loaded languages, in load order.
/// The dataset is small, so lookups by name are a linear scan.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// Case-insensitive exact match on the name. First match in load order wins.
    pub fn get(&self, name: &str) -> Option<&Language> {
        let wanted = name.to_lowercase();
        self.languages.iter().find(|lang| lang.name.to_lowercase() == wanted)
    }

    pub fn by_id(&self, id: LanguageId) -> Option<&Language> {
        self.languages.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LanguageId, &Language)> {
        self.languages.iter().enumerate()
    }

    pub fn as_slice(&self) -> &[Language] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Greeting;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::new(vec![
            Language::new("English", vec![Greeting::new("hello")]),
            Language::new("french", vec![Greeting::new("bonjour")]),
            Language::new("ENGLISH", vec![Greeting::new("howdy")]),
        ])
    }

    #[test]
    fn lookup_ignores_case() {
        let reg = registry();
        let a = reg.get("english").unwrap();
        let b = reg.get("English").unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(reg.get("FRENCH").unwrap().greetings[0].phrase, "bonjour");
    }

    #[test]
    fn first_match_wins_on_duplicate_names() {
        let reg = registry();
        assert_eq!(reg.get("english").unwrap().greetings[0].phrase, "hello");
    }

    #[test]
    fn absent_name_is_none() {
        let reg = registry();
        assert!(reg.get("Klingon").is_none());
        assert!(reg.get("").is_none());
        assert!(reg.by_id(3).is_none());
    }
}
