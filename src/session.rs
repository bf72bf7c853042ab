// src/session.rs
use crate::core::engine::TranslitEngine;
use crate::core::types::{ConversionOptions, Language, LanguageCode, LANGUAGES};

/// UI-facing translation state: the selected language pair, the source
/// text, and the last translation. The session borrows nothing from the
/// engine — it hands text to an engine on demand, so several sessions can
/// share one engine.
#[derive(Debug, Clone)]
pub struct TranslatorSession {
    pub source_language: Language,
    pub target_language: Language,
    pub source_text: String,
    pub translated_text: String,
    pub options: ConversionOptions,
    /// Words the last `translate` routed through the unknown-token
    /// policy, for highlighting.
    pub unresolved_tokens: Vec<String>,
}

impl TranslatorSession {
    /// Default selections: Myanglish → Burmese.
    pub fn new() -> Self {
        Self {
            source_language: LANGUAGES[0],
            target_language: LANGUAGES[1],
            source_text: String::new(),
            translated_text: String::new(),
            options: ConversionOptions::default(),
            unresolved_tokens: Vec::new(),
        }
    }

    /// Swap source and target languages and text. Applying this twice
    /// restores the original state exactly.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
    }

    /// Runs the engine over the current source text with the session's
    /// explicit language pair and stores the result.
    pub fn translate(&mut self, engine: &TranslitEngine) {
        let result = engine.convert(
            &self.source_text,
            Some(self.source_language.code),
            self.target_language.code,
            &self.options,
        );
        self.translated_text = result.text;
        self.unresolved_tokens = result.unresolved_tokens;
    }

    pub fn target_code(&self) -> LanguageCode {
        self.target_language.code
    }
}

impl Default for TranslatorSession {
    fn default() -> Self {
        Self::new()
    }
}
