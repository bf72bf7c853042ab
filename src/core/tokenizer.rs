// src/core/tokenizer.rs
use crate::core::detector::is_burmese_char;
use crate::core::types::{Token, TokenKind};

/// True for characters that belong to a Word token: Latin (or any other
/// alphabetic) letters, and Burmese-block codepoints other than the Burmese
/// digits and section marks. Digits, whitespace and punctuation in either
/// script are separators.
fn is_word_char(c: char) -> bool {
    if is_burmese_char(c) {
        // U+1040..=U+104F: Burmese digits and section/punctuation signs.
        // U+1090..=U+1099: Shan digits.
        !matches!(c, '\u{1040}'..='\u{104F}' | '\u{1090}'..='\u{1099}')
    } else {
        c.is_alphabetic()
    }
}

/// Splits text into maximal runs of word characters and separator
/// characters, preserving every input character exactly once. Stateless and
/// deterministic; concatenating the produced token texts in order yields the
/// input byte-for-byte.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_kind: Option<TokenKind> = None;

    for c in text.chars() {
        let kind = if is_word_char(c) { TokenKind::Word } else { TokenKind::Separator };
        match current_kind {
            Some(k) if k == kind => current.push(c),
            Some(k) => {
                tokens.push(Token { text: std::mem::take(&mut current), kind: k });
                current.push(c);
                current_kind = Some(kind);
            }
            None => {
                current.push(c);
                current_kind = Some(kind);
            }
        }
    }

    if let Some(kind) = current_kind {
        tokens.push(Token { text: current, kind });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn words_and_separators_alternate() {
        let tokens = tokenize("hello, nay kaung la?");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Separator,
                TokenKind::Word,
                TokenKind::Separator,
                TokenKind::Word,
                TokenKind::Separator,
                TokenKind::Word,
                TokenKind::Separator,
            ]
        );
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, ", ");
    }

    #[test]
    fn digits_are_separators() {
        let tokens = tokenize("xyz123");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token { text: "xyz".into(), kind: TokenKind::Word });
        assert_eq!(tokens[1], Token { text: "123".into(), kind: TokenKind::Separator });
    }

    #[test]
    fn burmese_digits_and_section_marks_are_separators() {
        let tokens = tokenize("ကောင်း၁၂။");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[0].text, "ကောင်း");
        assert_eq!(tokens[1].kind, TokenKind::Separator);
        assert_eq!(tokens[1].text, "၁၂။");
    }

    #[test]
    fn burmese_vowel_signs_stay_inside_the_word() {
        // Vowel signs and asat are combining marks, not letters, but they
        // must not split a Burmese word.
        let tokens = tokenize("မင်းကို");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Word);
    }

    #[test]
    fn reassembly_is_exact() {
        let samples = [
            "",
            "   ",
            "hello world",
            "nay kaung la? နေကောင်းလား!",
            "a1b2c3 -- ၁၂၃ ။",
            "tabs\tand\nnewlines",
        ];
        for s in samples {
            assert_eq!(reassemble(&tokenize(s)), s, "reassembly mismatch for {s:?}");
        }
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }
}
