// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod persistence;

pub use crate::config::{LoaderConfig, MatcherConfig, WordChars};
pub use crate::core::engine::GreetingIndex;
pub use crate::core::types::{Greeting, GreetingMatch, GreetingRef, Language, LanguageId};
pub use crate::error::{Error, Result};
pub use crate::loader::DictionaryLoader;
