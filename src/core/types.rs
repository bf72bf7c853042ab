// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Stable identity of a supported language. The engine knows exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    Myanglish,
    Burmese,
}

impl LanguageCode {
    /// Short code used at external boundaries (FFI, JSON).
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::Myanglish => "my",
            LanguageCode::Burmese => "bm",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "my" => Some(LanguageCode::Myanglish),
            "bm" => Some(LanguageCode::Burmese),
            _ => None,
        }
    }
}

/// A supported language. The code is the identity; the display name is
/// presentation-only and never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: LanguageCode,
    pub display_name: &'static str,
}

/// The two languages this engine converts between.
pub const LANGUAGES: [Language; 2] = [
    Language { code: LanguageCode::Myanglish, display_name: "Myanglish" },
    Language { code: LanguageCode::Burmese, display_name: "Burmese" },
];

impl Language {
    pub fn get(code: LanguageCode) -> Language {
        match code {
            LanguageCode::Myanglish => LANGUAGES[0],
            LanguageCode::Burmese => LANGUAGES[1],
        }
    }
}

/// Conversion direction, derived from a (source, target) language pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    MyanglishToBurmese,
    BurmeseToMyanglish,
}

impl Direction {
    /// Direction for a source/target pair, or `None` when the pair is a
    /// no-op (same language on both sides).
    pub fn between(source: LanguageCode, target: LanguageCode) -> Option<Direction> {
        match (source, target) {
            (LanguageCode::Myanglish, LanguageCode::Burmese) => {
                Some(Direction::MyanglishToBurmese)
            }
            (LanguageCode::Burmese, LanguageCode::Myanglish) => {
                Some(Direction::BurmeseToMyanglish)
            }
            _ => None,
        }
    }

    pub fn source(self) -> LanguageCode {
        match self {
            Direction::MyanglishToBurmese => LanguageCode::Myanglish,
            Direction::BurmeseToMyanglish => LanguageCode::Burmese,
        }
    }

    pub fn target(self) -> LanguageCode {
        match self {
            Direction::MyanglishToBurmese => LanguageCode::Burmese,
            Direction::BurmeseToMyanglish => LanguageCode::Myanglish,
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::MyanglishToBurmese => Direction::BurmeseToMyanglish,
            Direction::BurmeseToMyanglish => Direction::MyanglishToBurmese,
        }
    }
}

/// Kind of a tokenizer unit. Separator tokens pass through a conversion
/// verbatim and are never looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// One unit of tokenized input. Concatenating the `text` of every token in
/// order reconstructs the original input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

/// A single word/phrase mapping in the user dictionary. The store key is
/// `(normalize(source_word), direction)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub source_word: String,
    pub translation: String,
    pub direction: Direction,
}

/// Policy applied to a word with no dictionary entry and no complete
/// rule-engine match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownTokenMode {
    /// Emit the original word unchanged.
    LeaveUnknown,
    /// Emit the rule engine's partial output plus the raw residual.
    BestEffortTransliterate,
    /// Emit the original word wrapped in visible flag markers.
    FlagUnknown,
}

impl UnknownTokenMode {
    /// Numeric form used at the FFI boundary. Unrecognized values fall back
    /// to `LeaveUnknown` rather than erroring.
    pub fn from_u32(raw: u32) -> UnknownTokenMode {
        match raw {
            1 => UnknownTokenMode::BestEffortTransliterate,
            2 => UnknownTokenMode::FlagUnknown,
            _ => UnknownTokenMode::LeaveUnknown,
        }
    }
}

impl Default for UnknownTokenMode {
    fn default() -> Self {
        UnknownTokenMode::LeaveUnknown
    }
}

/// Options threaded explicitly through every conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionOptions {
    pub unknown_token_mode: UnknownTokenMode,
}

/// Output of a conversion: the reassembled text plus every word that fell
/// through to the unknown-token policy, for UI feedback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionResult {
    pub text: String,
    pub unresolved_tokens: Vec<String>,
}
