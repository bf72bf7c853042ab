// src/lib.rs

pub mod c_api;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod persistence;
pub mod session;

pub use crate::core::engine::TranslitEngine;
pub use crate::core::types::{
    ConversionOptions, ConversionResult, Direction, Language, LanguageCode, UnknownTokenMode,
};
pub use crate::dictionary::{DictionaryEditor, DictionaryStore};
pub use crate::error::DictionaryError;
pub use crate::session::TranslatorSession;
