use crate::core::converter::TransliterationEngine;
use crate::core::resolver::resolve;
use crate::core::types::{
    ConversionOptions, ConversionResult, Direction, LanguageCode, TokenKind,
};
use crate::core::{detector, tokenizer};
use crate::dictionary::DictionaryStore;
use crate::persistence::{load_from_disk, save_to_disk};
use std::path::Path;

// The translit engine is composed of the dictionary store and the
// rule-based transliterator; both are owned here for the session's
// lifetime.
pub struct TranslitEngine {
    pub dictionary: DictionaryStore,
    pub transliterator: TransliterationEngine,
    dictionary_path: Option<String>,
}

impl TranslitEngine {
    pub fn new() -> Self {
        Self {
            dictionary: DictionaryStore::new(),
            transliterator: TransliterationEngine::new(),
            dictionary_path: None,
        }
    }

    /// Loads the dictionary snapshot at `path`, falling back to an empty
    /// engine when the file is missing or unreadable. The path is retained
    /// for `save_dictionary`.
    pub fn from_file_or_new(path: &str) -> Self {
        let mut engine = load_from_disk(Path::new(path)).unwrap_or_else(|_| Self::new());
        engine.dictionary_path = Some(path.to_string());
        engine
    }

    /// Whole-string language classification; see `detector::detect`.
    pub fn detect_language(&self, text: &str) -> LanguageCode {
        detector::detect(text)
    }

    /// End-to-end conversion. Detects the source language when none is
    /// given; a source equal to the target is a no-op, not an error. Word
    /// tokens go through dictionary → rule engine → unknown-token policy;
    /// separator tokens pass through verbatim.
    pub fn convert(
        &self,
        text: &str,
        explicit_source: Option<LanguageCode>,
        target: LanguageCode,
        options: &ConversionOptions,
    ) -> ConversionResult {
        let source = explicit_source.unwrap_or_else(|| detector::detect(text));
        let direction = match Direction::between(source, target) {
            Some(direction) => direction,
            None => {
                return ConversionResult { text: text.to_string(), unresolved_tokens: Vec::new() }
            }
        };

        let mut output = String::new();
        let mut unresolved_tokens = Vec::new();

        for token in tokenizer::tokenize(text) {
            match token.kind {
                TokenKind::Separator => output.push_str(&token.text),
                TokenKind::Word => {
                    if let Some(translation) = self.dictionary.get(&token.text, direction) {
                        output.push_str(&apply_case_pattern(&token.text, &translation));
                        continue;
                    }
                    let outcome = self.transliterator.transliterate(&token.text, direction);
                    if outcome.is_complete() {
                        output.push_str(&outcome.converted);
                    } else {
                        let (text, is_unresolved) =
                            resolve(&token.text, &outcome, options.unknown_token_mode);
                        output.push_str(&text);
                        if is_unresolved {
                            unresolved_tokens.push(token.text.clone());
                        }
                    }
                }
            }
        }

        ConversionResult { text: output, unresolved_tokens }
    }

    pub fn convert_to_burmese(&self, text: &str, options: &ConversionOptions) -> String {
        self.convert(text, None, LanguageCode::Burmese, options).text
    }

    pub fn convert_to_myanglish(&self, text: &str, options: &ConversionOptions) -> String {
        self.convert(text, None, LanguageCode::Myanglish, options).text
    }

    pub fn save_dictionary(&self) -> Result<(), std::io::Error> {
        if let Some(path) = &self.dictionary_path {
            save_to_disk(self, Path::new(path))
        } else {
            Ok(()) // Don't error if no path is set
        }
    }
}

impl Default for TranslitEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Propagates the source token's case pattern onto a dictionary hit:
/// ALL-CAPS and Title-case sources keep their shape. A no-op for Burmese
/// translations, which have no case.
fn apply_case_pattern(source: &str, translation: &str) -> String {
    let has_upper = source.chars().any(|c| c.is_uppercase());
    let has_lower = source.chars().any(|c| c.is_lowercase());

    if has_upper && !has_lower {
        return translation.to_uppercase();
    }

    let mut chars = source.chars();
    let title_case = chars.next().is_some_and(|c| c.is_uppercase())
        && chars.all(|c| !c.is_uppercase());
    if title_case {
        let mut out = String::with_capacity(translation.len());
        let mut rest = translation.chars();
        if let Some(first) = rest.next() {
            out.extend(first.to_uppercase());
            out.extend(rest);
        }
        return out;
    }

    translation.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::UnknownTokenMode;
    use crate::dictionary::DictionaryEditor;

    fn engine_with_hello() -> TranslitEngine {
        let engine = TranslitEngine::new();
        DictionaryEditor
            .add_entry(
                &engine.dictionary,
                "hello",
                "ဟယ်လို",
                Direction::MyanglishToBurmese,
            )
            .unwrap();
        engine
    }

    #[test]
    fn dictionary_round_trip() {
        let engine = engine_with_hello();
        let text = engine.convert_to_burmese("hello", &ConversionOptions::default());
        assert_eq!(text, "ဟယ်လို");
    }

    #[test]
    fn dictionary_wins_over_rule_engine() {
        // "nay" is fully transliterable, but a dictionary entry must take
        // precedence.
        let engine = TranslitEngine::new();
        DictionaryEditor
            .add_entry(&engine.dictionary, "nay", "နေ့", Direction::MyanglishToBurmese)
            .unwrap();
        let text = engine.convert_to_burmese("nay", &ConversionOptions::default());
        assert_eq!(text, "နေ့");
    }

    #[test]
    fn same_source_and_target_is_a_noop() {
        let engine = engine_with_hello();
        let result = engine.convert(
            "hello world",
            None,
            LanguageCode::Myanglish,
            &ConversionOptions::default(),
        );
        assert_eq!(result.text, "hello world");
        assert!(result.unresolved_tokens.is_empty());
    }

    #[test]
    fn explicit_source_overrides_detection() {
        let engine = engine_with_hello();
        // Detected source would be Myanglish → Myanglish (no-op); forcing
        // the source to Burmese makes it a real conversion.
        let result = engine.convert(
            "hello",
            Some(LanguageCode::Burmese),
            LanguageCode::Myanglish,
            &ConversionOptions::default(),
        );
        // No Burmese→Myanglish entry for "hello"; nothing decomposes, so
        // the word falls through to the policy.
        assert_eq!(result.unresolved_tokens, vec!["hello".to_string()]);
    }

    #[test]
    fn separators_pass_through_unchanged() {
        let engine = engine_with_hello();
        let text = engine.convert_to_burmese("hello, hello!", &ConversionOptions::default());
        assert_eq!(text, "ဟယ်လို, ဟယ်လို!");
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let engine = TranslitEngine::new();
        let result = engine.convert(
            "",
            None,
            LanguageCode::Burmese,
            &ConversionOptions::default(),
        );
        assert_eq!(result.text, "");
        assert!(result.unresolved_tokens.is_empty());
    }

    #[test]
    fn unknown_word_leave_mode() {
        let engine = TranslitEngine::new();
        let result = engine.convert(
            "xyz123",
            None,
            LanguageCode::Burmese,
            &ConversionOptions::default(),
        );
        assert_eq!(result.text, "xyz123");
        assert_eq!(result.unresolved_tokens, vec!["xyz".to_string()]);
    }

    #[test]
    fn unknown_word_flag_mode() {
        let engine = TranslitEngine::new();
        let options =
            ConversionOptions { unknown_token_mode: UnknownTokenMode::FlagUnknown };
        let result = engine.convert("xyz123", None, LanguageCode::Burmese, &options);
        assert_eq!(result.text, "⟦xyz⟧123");
        assert_eq!(result.unresolved_tokens, vec!["xyz".to_string()]);
    }

    #[test]
    fn unknown_word_best_effort_mode() {
        let engine = TranslitEngine::new();
        let options = ConversionOptions {
            unknown_token_mode: UnknownTokenMode::BestEffortTransliterate,
        };
        let result = engine.convert("thuxq", None, LanguageCode::Burmese, &options);
        assert_eq!(result.text, "သုxq");
        assert_eq!(result.unresolved_tokens, vec!["thuxq".to_string()]);
    }

    #[test]
    fn complete_rule_engine_match_is_not_unresolved() {
        let engine = TranslitEngine::new();
        let result = engine.convert(
            "thu kaung",
            None,
            LanguageCode::Burmese,
            &ConversionOptions::default(),
        );
        assert_eq!(result.text, "သု ကောင်");
        assert!(result.unresolved_tokens.is_empty());
    }

    #[test]
    fn case_pattern_all_caps() {
        // Burmese sources are caseless, so exercise the rule directly.
        assert_eq!(apply_case_pattern("HELLO", "hay lo"), "HAY LO");
        assert_eq!(apply_case_pattern("Hello", "hay lo"), "Hay lo");
        assert_eq!(apply_case_pattern("hello", "hay lo"), "hay lo");
        assert_eq!(apply_case_pattern("hElLo", "hay lo"), "hay lo");
    }

    #[test]
    fn case_pattern_applies_to_dictionary_hits() {
        let engine = engine_with_hello();
        // ALL-CAPS and Title-case lookups hit the same normalized entry;
        // Burmese output is caseless so the text is identical, but the
        // lookup itself must succeed.
        for word in ["HELLO", "Hello"] {
            let text = engine.convert_to_burmese(word, &ConversionOptions::default());
            assert_eq!(text, "ဟယ်လို");
        }
    }

    #[test]
    fn mixed_script_input_converts_word_by_word() {
        let engine = TranslitEngine::new();
        // Whole-string detection classifies this as Burmese. The Burmese
        // word decomposes; the Latin word has no Burmese signs to map and
        // falls through to the default policy untouched.
        let result = engine.convert(
            "ok ကောင်း",
            None,
            LanguageCode::Myanglish,
            &ConversionOptions::default(),
        );
        assert_eq!(result.text, "ok kaung:");
        assert_eq!(result.unresolved_tokens, vec!["ok".to_string()]);
    }
}
