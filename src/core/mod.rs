// src/core/mod.rs
pub mod boundary;
pub mod engine;
pub mod registry;
pub mod trie;
pub mod types;
