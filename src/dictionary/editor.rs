// src/dictionary/editor.rs
use crate::core::types::{DictionaryEntry, Direction};
use crate::dictionary::store::DictionaryStore;
use crate::error::DictionaryError;

/// Validated mutation front-end for the dictionary store. All writes from
/// the outside world go through here; the store's `put`/`edit` stay free of
/// input policy.
pub struct DictionaryEditor;

impl DictionaryEditor {
    /// Adds a new entry. Fails with `Validation` when word or translation
    /// is empty after trimming, and with `Duplicate` when the normalized
    /// key already exists — use `edit_entry` to change an existing mapping.
    pub fn add_entry(
        &self,
        store: &DictionaryStore,
        word: &str,
        translation: &str,
        direction: Direction,
    ) -> Result<(), DictionaryError> {
        let (word, translation) = Self::validated(word, translation)?;
        store.put(DictionaryEntry {
            source_word: word.to_string(),
            translation: translation.to_string(),
            direction,
        })
    }

    /// Replaces the translation of an existing entry. Fails with
    /// `Validation` on empty input and `NotFound` when the key is absent.
    pub fn edit_entry(
        &self,
        store: &DictionaryStore,
        word: &str,
        new_translation: &str,
        direction: Direction,
    ) -> Result<(), DictionaryError> {
        let (word, new_translation) = Self::validated(word, new_translation)?;
        store.edit(word, new_translation, direction)
    }

    fn validated<'a>(
        word: &'a str,
        translation: &'a str,
    ) -> Result<(&'a str, &'a str), DictionaryError> {
        let word = word.trim();
        let translation = translation.trim();
        if word.is_empty() {
            return Err(DictionaryError::Validation("word must not be empty"));
        }
        if translation.is_empty() {
            return Err(DictionaryError::Validation("translation must not be empty"));
        }
        Ok((word, translation))
    }
}
