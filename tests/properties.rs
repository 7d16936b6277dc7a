//! Property checks over the embedded dictionary.

use greet_core::{DictionaryLoader, GreetingIndex};
use proptest::prelude::*;
use std::sync::OnceLock;

fn index() -> &'static GreetingIndex {
    static INDEX: OnceLock<GreetingIndex> = OnceLock::new();
    INDEX.get_or_init(|| GreetingIndex::build(DictionaryLoader::load_embedded().unwrap()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn find_is_subset_of_match(text in "[a-zA-Z ]{0,12}") {
        let index = index();
        let matched = index.match_greetings(&text);
        for m in index.find_greetings(&text) {
            prop_assert!(matched.contains(&m));
        }
    }

    #[test]
    fn queries_are_idempotent(text in "\\PC{0,30}") {
        let index = index();
        prop_assert_eq!(index.has_greeting(&text), index.has_greeting(&text));
        prop_assert_eq!(index.find_greetings(&text), index.find_greetings(&text));
        prop_assert_eq!(index.match_greetings(&text), index.match_greetings(&text));
    }

    #[test]
    fn greeting_glued_to_a_word_is_not_found(prefix in "[a-z]{1,4}", suffix in "[a-z]{1,4}") {
        // letters on both sides keep "hello" from standing alone;
        // any other hit would have to come from the random letters themselves
        let text = format!("{prefix}hello{suffix}");
        if index().has_greeting(&text) {
            let found = index().find_in_text(&text);
            prop_assert!(!found.iter().any(|m| m.phrase() == "hello"));
        }
    }

    #[test]
    fn greeting_between_spaces_is_found(left in "[0-9 ]{0,6}", right in "[ .,!?]{0,6}") {
        let text = format!("{left} hello {right}");
        prop_assert!(index().has_greeting(&text));
    }

    #[test]
    fn has_greeting_agrees_with_find_in_text(
        text in "(hello|hi|hola|this|the|good|morning|guten|tag|,| ){0,8}"
    ) {
        let index = index();
        prop_assert_eq!(index.has_greeting(&text), !index.find_in_text(&text).is_empty());
    }
}
