// File: src/persistence.rs
use crate::core::engine::TranslitEngine;
use crate::core::types::DictionaryEntry;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error};
use std::path::Path;
use tempfile::NamedTempFile;

/// The serializable state of the engine: a flat snapshot of the dictionary
/// entries in insertion order. The transliteration tables are compiled in
/// and never persisted.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SerializableState {
    entries: Vec<DictionaryEntry>,
}

/// Writes the dictionary snapshot atomically: serialize into a temp file in
/// the target directory, then persist over the destination, so a crash
/// mid-write never leaves a truncated snapshot behind.
pub fn save_to_disk(engine: &TranslitEngine, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState { entries: engine.dictionary.snapshot() };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &state)
        .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<TranslitEngine, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    let engine = TranslitEngine::new();
    for entry in state.entries {
        // A well-formed snapshot has unique keys; skip any corrupt
        // duplicate row instead of failing the whole load.
        let _ = engine.dictionary.put(entry);
    }

    Ok(engine)
}
