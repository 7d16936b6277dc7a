// File: src/loader.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::LoaderConfig;
use crate::core::types::Language;
use crate::error::{Error, Result};
use crate::persistence::{load_snapshot, save_snapshot};

const EMBEDDED: &[(&str, &str)] = &[
    ("a.json", include_str!("../data/a.json")),
    ("e.json", include_str!("../data/e.json")),
    ("f.json", include_str!("../data/f.json")),
    ("g.json", include_str!("../data/g.json")),
    ("h.json", include_str!("../data/h.json")),
    ("j.json", include_str!("../data/j.json")),
    ("s.json", include_str!("../data/s.json")),
];

/// Reads language records and hands them over fully validated.
pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load the dictionary compiled into the binary.
    pub fn load_embedded() -> Result<Vec<Language>> {
        tracing::info!("Loading embedded greeting dictionary...");
        let mut languages = Vec::new();
        for (name, json) in EMBEDDED {
            let parsed = parse(json)?;
            tracing::info!(file = name, languages = parsed.len(), "parsed embedded file");
            languages.extend(parsed);
        }
        validate(&languages)?;
        log_loaded(&languages);
        Ok(languages)
    }

    /// Load every `*.json` file of `dir`, in file name order.
    pub fn load_dir(dir: &Path) -> Result<Vec<Language>> {
        if !dir.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }
        tracing::info!("Loading greeting dictionary from: {}", dir.display());

        let files = json_files(fs::read_dir(dir)?.map(|entry| entry.map(|e| e.path())))?;

        let mut languages = Vec::new();
        for path in files {
            let json = fs::read_to_string(&path)?;
            let parsed = parse(&json).map_err(|e| match e {
                Error::Json(err) => {
                    Error::InvalidDictionary(format!("{}: {}", path.display(), err))
                }
                other => other,
            })?;
            tracing::info!(file = %path.display(), languages = parsed.len(), "parsed file");
            languages.extend(parsed);
        }
        validate(&languages)?;
        log_loaded(&languages);
        Ok(languages)
    }

    /// Parse one JSON array of language records.
    pub fn from_json(json: &str) -> Result<Vec<Language>> {
        let languages = parse(json)?;
        validate(&languages)?;
        Ok(languages)
    }

    /// Resolve a [`LoaderConfig`]: an existing snapshot wins, otherwise the
    /// directory (or embedded data) is loaded and, if a snapshot path is set,
    /// written out for next time.
    pub fn load(config: &LoaderConfig) -> Result<Vec<Language>> {
        if let Some(snapshot) = &config.snapshot {
            if snapshot.is_file() {
                let languages = load_snapshot(snapshot)?;
                validate(&languages)?;
                return Ok(languages);
            }
        }

        let languages = match &config.data_dir {
            Some(dir) => Self::load_dir(dir)?,
            None => Self::load_embedded()?,
        };

        if let Some(snapshot) = &config.snapshot {
            save_snapshot(&languages, snapshot)?;
        }
        Ok(languages)
    }
}

/// Keeps the `*.json` files, sorted by name. A failed entry fails the whole load.
fn json_files<I>(entries: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut files = entries.into_iter().collect::<io::Result<Vec<_>>>()?;
    files.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"));
    files.sort();
    Ok(files)
}

fn parse(json: &str) -> Result<Vec<Language>> {
    Ok(serde_json::from_str(json)?)
}

/// Rejects records the index cannot represent meaningfully.
fn validate(languages: &[Language]) -> Result<()> {
    for (i, lang) in languages.iter().enumerate() {
        if lang.name.trim().is_empty() {
            return Err(Error::InvalidDictionary(format!("language #{i} has an empty name")));
        }
        if let Some(pos) = lang.greetings.iter().position(|g| g.phrase.is_empty()) {
            return Err(Error::InvalidDictionary(format!(
                "{}: greeting #{pos} has an empty phrase",
                lang.name
            )));
        }
    }
    Ok(())
}

fn log_loaded(languages: &[Language]) {
    let greetings: usize = languages.iter().map(|l| l.greetings.len()).sum();
    tracing::info!("Loaded {} languages with {} greetings", languages.len(), greetings);
}
