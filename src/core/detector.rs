// src/core/detector.rs
use crate::core::types::LanguageCode;

/// First codepoint of the Burmese Unicode block.
pub const BURMESE_BLOCK_START: char = '\u{1000}';
/// Last codepoint of the Burmese Unicode block.
pub const BURMESE_BLOCK_END: char = '\u{109F}';

/// True when the character falls inside the Burmese block U+1000..=U+109F.
pub fn is_burmese_char(c: char) -> bool {
    (BURMESE_BLOCK_START..=BURMESE_BLOCK_END).contains(&c)
}

/// Whole-string language classification. Any Burmese-block codepoint
/// anywhere in the text makes the text Burmese; everything else, including
/// the empty string, is Myanglish.
pub fn detect(text: &str) -> LanguageCode {
    if text.chars().any(is_burmese_char) {
        LanguageCode::Burmese
    } else {
        LanguageCode::Myanglish
    }
}
