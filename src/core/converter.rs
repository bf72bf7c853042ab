// src/core/converter.rs
use crate::core::trie::SignTrie;
use crate::core::types::Direction;

/// Canonical sign table: romanized sequence on the left, Burmese
/// syllable-building codepoints on the right. Used in both directions
/// (inverted for Burmese → Myanglish). Longest-prefix matching resolves
/// overlaps, so "th" always beats "t" + "h".
const SIGN_TABLE: &[(&str, &str)] = &[
    // Consonants
    ("k", "\u{1000}"),          // က
    ("kh", "\u{1001}"),         // ခ
    ("g", "\u{1002}"),          // ဂ
    ("gh", "\u{1003}"),         // ဃ
    ("ng", "\u{1004}"),         // င
    ("s", "\u{1005}"),          // စ
    ("hs", "\u{1006}"),         // ဆ
    ("z", "\u{1007}"),          // ဇ
    ("zh", "\u{1008}"),         // ဈ
    ("ny", "\u{100A}"),         // ည
    ("t", "\u{1010}"),          // တ
    ("ht", "\u{1011}"),         // ထ
    ("d", "\u{1012}"),          // ဒ
    ("dh", "\u{1013}"),         // ဓ
    ("n", "\u{1014}"),          // န
    ("p", "\u{1015}"),          // ပ
    ("hp", "\u{1016}"),         // ဖ
    ("b", "\u{1017}"),          // ဗ
    ("bh", "\u{1018}"),         // ဘ
    ("m", "\u{1019}"),          // မ
    ("y", "\u{101A}"),          // ယ
    ("r", "\u{101B}"),          // ရ
    ("l", "\u{101C}"),          // လ
    ("w", "\u{101D}"),          // ဝ
    ("th", "\u{101E}"),         // သ
    ("h", "\u{101F}"),          // ဟ
    // Consonant + medial clusters
    ("ky", "\u{1000}\u{103B}"), // ကျ
    ("ch", "\u{1001}\u{103B}"), // ချ (written with kha in this scheme)
    ("gy", "\u{1002}\u{103B}"), // ဂျ
    ("py", "\u{1015}\u{103B}"), // ပျ
    ("phy", "\u{1016}\u{103B}"), // ဖျ
    ("by", "\u{1017}\u{103B}"), // ဗျ
    ("my", "\u{1019}\u{103B}"), // မျ
    ("kr", "\u{1000}\u{103C}"), // ကြ
    ("pr", "\u{1015}\u{103C}"), // ပြ
    ("mr", "\u{1019}\u{103C}"), // မြ
    ("sh", "\u{101B}\u{103E}"), // ရှ
    ("shw", "\u{101B}\u{103D}\u{103E}"), // ရွှ
    ("thw", "\u{101E}\u{103D}"), // သွ
    ("hm", "\u{1019}\u{103E}"), // မှ
    ("hn", "\u{1014}\u{103E}"), // နှ
    ("hl", "\u{101C}\u{103E}"), // လှ
    ("hng", "\u{1004}\u{103E}"), // ငှ
    ("hny", "\u{100A}\u{103E}"), // ညှ
    ("kw", "\u{1000}\u{103D}"), // ကွ
    ("tw", "\u{1010}\u{103D}"), // တွ
    ("sw", "\u{1005}\u{103D}"), // စွ
    ("lw", "\u{101C}\u{103D}"), // လွ
    // Vowel signs
    ("aa", "\u{102C}"),         // ာ
    ("i", "\u{102D}"),          // ိ
    ("ee", "\u{102E}"),         // ီ
    ("u", "\u{102F}"),          // ု
    ("oo", "\u{1030}"),         // ူ
    ("ay", "\u{1031}"),         // ေ
    ("ai", "\u{1032}"),         // ဲ
    ("aw", "\u{1031}\u{102C}"), // ော
    ("o", "\u{102D}\u{102F}"),  // ို
    // Rimes: vowel sign(s) + final consonant + asat
    ("an", "\u{1014}\u{103A}"),                 // န်
    ("in", "\u{1004}\u{103A}"),                 // င်
    ("ein", "\u{102D}\u{1014}\u{103A}"),        // ိန်
    ("un", "\u{102F}\u{1014}\u{103A}"),         // ုန်
    ("am", "\u{1019}\u{103A}"),                 // မ်
    ("aung", "\u{1031}\u{102C}\u{1004}\u{103A}"), // ောင်
    ("aing", "\u{102D}\u{102F}\u{1004}\u{103A}"), // ိုင်
    ("at", "\u{1010}\u{103A}"),                 // တ်
    ("it", "\u{1005}\u{103A}"),                 // စ်
    ("et", "\u{1000}\u{103A}"),                 // က်
    ("eik", "\u{102D}\u{1010}\u{103A}"),        // ိတ်
    ("auk", "\u{1031}\u{102C}\u{1000}\u{103A}"), // ောက်
    ("aik", "\u{102D}\u{102F}\u{1000}\u{103A}"), // ိုက်
    ("ut", "\u{102F}\u{1010}\u{103A}"),         // ုတ်
    // Tone marks
    (".", "\u{1037}"),          // ့
    (":", "\u{1038}"),          // း
];

/// Romanized spellings accepted on input but never produced when
/// decomposing Burmese text. Layered over the canonical table, so an alias
/// that repeats a canonical key would overwrite it — keep them disjoint.
const ROMAN_ALIASES: &[(&str, &str)] = &[
    // The inherent vowel is not written in Burmese script.
    ("a", ""),
    ("ph", "\u{1016}"),         // ဖ
    ("f", "\u{1016}"),          // ဖ (loanwords)
    ("v", "\u{1017}"),          // ဗ (loanwords)
    ("j", "\u{1002}\u{103B}"),  // ဂျ
    ("c", "\u{1005}"),          // စ
    ("e", "\u{1031}"),          // ေ
    ("ii", "\u{102E}"),         // ီ
    ("uu", "\u{1030}"),         // ူ
    ("au", "\u{1031}\u{102C}"), // ော
    ("ar", "\u{102C}"),         // ာ
    ("ain", "\u{102D}\u{102F}\u{1004}\u{103A}"), // ိုင်
];

/// Burmese signs that only appear on the decomposition side: standalone
/// medials, the retroflex series, independent vowels, and finals whose
/// romanization differs from the canonical rime spellings.
const BURMESE_DECOMPOSITIONS: &[(&str, &str)] = &[
    ("\u{1021}", "a"),          // အ
    ("\u{103B}", "y"),          // ျ
    ("\u{103C}", "r"),          // ြ
    ("\u{103D}", "w"),          // ွ
    ("\u{103E}", "h"),          // ှ
    ("\u{1009}", "ny"),         // ဉ
    ("\u{100B}", "t"),          // ဋ
    ("\u{100C}", "ht"),         // ဌ
    ("\u{100D}", "d"),          // ဍ
    ("\u{100E}", "dh"),         // ဎ
    ("\u{100F}", "n"),          // ဏ
    ("\u{1020}", "l"),          // ဠ
    ("\u{1023}", "i"),          // ဣ
    ("\u{1024}", "ee"),         // ဤ
    ("\u{1025}", "u"),          // ဥ
    ("\u{1026}", "oo"),         // ဦ
    ("\u{1027}", "ay"),         // ဧ
    ("\u{1029}", "aw"),         // ဩ
    ("\u{102A}", "aw"),         // ဪ
    ("\u{1036}", "n"),          // ံ
    ("\u{101A}\u{103A}", "e"),  // ယ် final
    ("\u{1015}\u{103A}", "ap"), // ပ် final
];

/// Outcome of one rule-engine pass over a single word. `converted` holds
/// everything the table matched; `residual` holds the unmatched tail, empty
/// on a complete conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslitOutcome {
    pub converted: String,
    pub residual: String,
}

impl TranslitOutcome {
    pub fn is_complete(&self) -> bool {
        self.residual.is_empty()
    }

    /// Partial output with the raw residual appended, for the best-effort
    /// unknown-token mode.
    pub fn best_effort(&self) -> String {
        let mut text = self.converted.clone();
        text.push_str(&self.residual);
        text
    }
}

/// Table-driven transliterator between Myanglish and Burmese script.
/// Purely deterministic: identical input and direction always produce the
/// identical outcome.
pub struct TransliterationEngine {
    roman_to_burmese: SignTrie,
    burmese_to_roman: SignTrie,
}

impl TransliterationEngine {
    pub fn new() -> Self {
        let roman_to_burmese = SignTrie::from_pairs(
            SIGN_TABLE.iter().chain(ROMAN_ALIASES).copied(),
        );
        // Invert the canonical table for decomposition and layer the
        // decomposition-only signs on top.
        let burmese_to_roman = SignTrie::from_pairs(
            SIGN_TABLE
                .iter()
                .map(|&(roman, burmese)| (burmese, roman))
                .chain(BURMESE_DECOMPOSITIONS.iter().copied()),
        );
        Self { roman_to_burmese, burmese_to_roman }
    }

    /// Greedy longest-prefix transliteration of a single word. Walks the
    /// input in logical (storage) order — for Burmese this is Unicode
    /// combining order, so prefixed-looking vowels like U+1031 are handled
    /// where they are stored, not where they render. Stops at the first
    /// position where no table entry matches and returns the remainder as
    /// the residual.
    pub fn transliterate(&self, word: &str, direction: Direction) -> TranslitOutcome {
        let (trie, input) = match direction {
            Direction::MyanglishToBurmese => {
                (&self.roman_to_burmese, word.to_lowercase())
            }
            Direction::BurmeseToMyanglish => (&self.burmese_to_roman, word.to_string()),
        };

        let mut converted = String::new();
        let mut rest = input.as_str();
        while !rest.is_empty() {
            match trie.longest_match(rest) {
                Some((consumed, output)) => {
                    converted.push_str(output);
                    rest = &rest[consumed..];
                }
                None => {
                    return TranslitOutcome { converted, residual: rest.to_string() };
                }
            }
        }
        TranslitOutcome { converted, residual: String::new() }
    }
}

impl Default for TransliterationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TransliterationEngine {
        TransliterationEngine::new()
    }

    fn to_burmese(word: &str) -> TranslitOutcome {
        engine().transliterate(word, Direction::MyanglishToBurmese)
    }

    fn to_myanglish(word: &str) -> TranslitOutcome {
        engine().transliterate(word, Direction::BurmeseToMyanglish)
    }

    #[test]
    fn digraph_beats_single_letters() {
        // "th" must consume the two-character entry, never "t" then "h".
        let outcome = to_burmese("thu");
        assert_eq!(outcome.converted, "သု");
        assert!(outcome.is_complete());
    }

    #[test]
    fn cluster_beats_digraph() {
        // "shw" outranks "sh", which outranks "s".
        assert_eq!(to_burmese("shwe").converted, "ရွှေ");
        assert_eq!(to_burmese("she").converted, "ရှေ");
    }

    #[test]
    fn rime_entries_compose_syllables() {
        assert_eq!(to_burmese("kaung").converted, "ကောင်");
        assert_eq!(to_burmese("sein").converted, "စိန်");
        assert_eq!(to_burmese("hnget").converted, "ငှက်");
        assert_eq!(to_burmese("chit").converted, "ချစ်");
    }

    #[test]
    fn inherent_vowel_is_silent() {
        assert_eq!(to_burmese("ka").converted, "က");
        assert_eq!(to_burmese("na").converted, "န");
    }

    #[test]
    fn uppercase_input_is_folded() {
        assert_eq!(to_burmese("THU").converted, to_burmese("thu").converted);
    }

    #[test]
    fn unmatchable_word_is_all_residual() {
        let outcome = to_burmese("xyz");
        assert_eq!(outcome.converted, "");
        assert_eq!(outcome.residual, "xyz");
        assert!(!outcome.is_complete());
    }

    #[test]
    fn partial_match_keeps_converted_prefix() {
        let outcome = to_burmese("thuxq");
        assert_eq!(outcome.converted, "သု");
        assert_eq!(outcome.residual, "xq");
        assert_eq!(outcome.best_effort(), "သုxq");
    }

    #[test]
    fn burmese_decomposition_follows_storage_order() {
        // ကောင်း is stored က ေ ာ င ် း although ေ renders first.
        let outcome = to_myanglish("ကောင်း");
        assert_eq!(outcome.converted, "kaung:");
        assert!(outcome.is_complete());
    }

    #[test]
    fn decomposition_handles_medials_and_finals() {
        assert_eq!(to_myanglish("ကျောင်း").converted, "kyaung:");
        assert_eq!(to_myanglish("စက်").converted, "set");
        assert_eq!(to_myanglish("ရွှေ").converted, "shway");
    }

    #[test]
    fn retroflex_series_decomposes() {
        assert_eq!(to_myanglish("\u{100B}\u{100C}").converted, "tht");
    }

    #[test]
    fn unexpected_sign_becomes_residual() {
        // U+1039 (stacked-consonant virama) has no table entry; the
        // remainder comes back as an unresolved fragment instead of
        // aborting.
        let outcome = to_myanglish("ဒု\u{1039}ခ");
        assert_eq!(outcome.converted, "du");
        assert_eq!(outcome.residual, "\u{1039}ခ");
    }

    #[test]
    fn empty_word_is_trivially_complete() {
        let outcome = to_burmese("");
        assert_eq!(outcome.converted, "");
        assert!(outcome.is_complete());
    }

    #[test]
    fn transliteration_is_deterministic() {
        let a = to_burmese("mingalaba");
        let b = to_burmese("mingalaba");
        assert_eq!(a, b);
    }

    #[test]
    fn syllable_round_trip() {
        // Words built only from canonical table rows survive a full
        // round trip.
        for word in ["thu", "kaung", "sein", "lu"] {
            let burmese = to_burmese(word);
            assert!(burmese.is_complete());
            let back = to_myanglish(&burmese.converted);
            assert!(back.is_complete());
            assert_eq!(back.converted, *word, "round trip failed for {word}");
        }
    }
}
