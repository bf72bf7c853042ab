// src/dictionary/store.rs
use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::types::{DictionaryEntry, Direction};
use crate::error::DictionaryError;

/// Store key normalization: Myanglish words are case-insensitive, Burmese
/// words have no case and are kept as-is.
pub fn normalize_word(word: &str, direction: Direction) -> String {
    match direction {
        Direction::MyanglishToBurmese => word.to_lowercase(),
        Direction::BurmeseToMyanglish => word.to_string(),
    }
}

#[derive(Default)]
struct StoreInner {
    // Entries in insertion order; the index maps the normalized key to a
    // position in `entries`.
    entries: Vec<DictionaryEntry>,
    index: HashMap<(Direction, String), usize>,
}

/// The user dictionary: a flat word/phrase mapping per direction, owned by
/// the engine for the lifetime of a session. `RwLock` interior mutability
/// gives the single-writer/multi-reader discipline the conversion path
/// relies on: lookups never observe a half-written entry.
pub struct DictionaryStore {
    inner: RwLock<StoreInner>,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self { inner: RwLock::new(StoreInner::default()) }
    }

    /// Translation for `(normalize(word), direction)`, if present.
    pub fn get(&self, word: &str, direction: Direction) -> Option<String> {
        let key = (direction, normalize_word(word, direction));
        let inner = self.inner.read().unwrap();
        inner.index.get(&key).map(|&i| inner.entries[i].translation.clone())
    }

    /// Inserts an entry, failing on a duplicate key. Validation of the
    /// entry's content is the editor's job.
    pub fn put(&self, entry: DictionaryEntry) -> Result<(), DictionaryError> {
        let key = (entry.direction, normalize_word(&entry.source_word, entry.direction));
        let mut inner = self.inner.write().unwrap();
        if inner.index.contains_key(&key) {
            return Err(DictionaryError::Duplicate { word: entry.source_word });
        }
        inner.entries.push(entry);
        let pos = inner.entries.len() - 1;
        inner.index.insert(key, pos);
        Ok(())
    }

    /// Replaces the translation of an existing entry in place. The write
    /// lock makes the edit atomic: readers see either the old or the new
    /// translation, never a mixture.
    pub fn edit(
        &self,
        word: &str,
        new_translation: &str,
        direction: Direction,
    ) -> Result<(), DictionaryError> {
        let key = (direction, normalize_word(word, direction));
        let mut inner = self.inner.write().unwrap();
        match inner.index.get(&key).copied() {
            Some(i) => {
                inner.entries[i].translation = new_translation.to_string();
                Ok(())
            }
            None => Err(DictionaryError::NotFound { word: word.to_string() }),
        }
    }

    /// Entries for one direction, in insertion order.
    pub fn list(&self, direction: Direction) -> Vec<DictionaryEntry> {
        let inner = self.inner.read().unwrap();
        inner.entries.iter().filter(|e| e.direction == direction).cloned().collect()
    }

    /// Every entry in insertion order, for persistence snapshots.
    pub fn snapshot(&self) -> Vec<DictionaryEntry> {
        self.inner.read().unwrap().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::new()
    }
}
