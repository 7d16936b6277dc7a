// File: src/persistence.rs
use crate::core::types::{Greeting, Language};
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const SNAPSHOT_VERSION: u32 = 1;

/// On-disk form of a loaded dictionary.
/// Bincode can't drive `#[serde(flatten)]`, so extra fields travel as a JSON string.
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableState {
    version: u32,
    languages: Vec<StoredLanguage>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct StoredLanguage {
    name: String,
    greetings: Vec<StoredGreeting>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct StoredGreeting {
    phrase: String,
    extra: String,
}

impl StoredGreeting {
    fn from_greeting(greeting: &Greeting) -> Result<Self> {
        Ok(Self {
            phrase: greeting.phrase.clone(),
            extra: serde_json::to_string(&greeting.extra)?,
        })
    }

    fn into_greeting(self) -> Result<Greeting> {
        Ok(Greeting {
            phrase: self.phrase,
            extra: serde_json::from_str(&self.extra)?,
        })
    }
}

/// Writes `languages` atomically: temp file in the target directory, then rename.
pub fn save_snapshot(languages: &[Language], path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        version: SNAPSHOT_VERSION,
        languages: languages
            .iter()
            .map(|lang| -> Result<StoredLanguage> {
                Ok(StoredLanguage {
                    name: lang.name.clone(),
                    greetings: lang
                        .greetings
                        .iter()
                        .map(StoredGreeting::from_greeting)
                        .collect::<Result<_>>()?,
                })
            })
            .collect::<Result<_>>()?,
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    tracing::debug!(path = %path.display(), languages = languages.len(), "wrote snapshot");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Vec<Language>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    if state.version != SNAPSHOT_VERSION {
        return Err(Error::SnapshotVersion {
            found: state.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    let languages = state
        .languages
        .into_iter()
        .map(|stored| -> Result<Language> {
            Ok(Language {
                name: stored.name,
                greetings: stored
                    .greetings
                    .into_iter()
                    .map(StoredGreeting::into_greeting)
                    .collect::<Result<_>>()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(path = %path.display(), languages = languages.len(), "read snapshot");
    Ok(languages)
}
