// src/core/resolver.rs
use crate::core::converter::TranslitOutcome;
use crate::core::types::UnknownTokenMode;

/// Opening marker wrapped around flagged tokens. Chosen from outside both
/// scripts so the UI can find it unambiguously.
pub const FLAG_OPEN: &str = "⟦";
/// Closing marker wrapped around flagged tokens.
pub const FLAG_CLOSE: &str = "⟧";

/// Applies the configured out-of-vocabulary policy to a word the dictionary
/// missed and the rule engine could not fully convert. Returns the text to
/// emit and whether the word counts as unresolved.
pub fn resolve(word: &str, outcome: &TranslitOutcome, mode: UnknownTokenMode) -> (String, bool) {
    match mode {
        UnknownTokenMode::LeaveUnknown => (word.to_string(), true),
        UnknownTokenMode::BestEffortTransliterate => {
            (outcome.best_effort(), !outcome.is_complete())
        }
        UnknownTokenMode::FlagUnknown => {
            (format!("{FLAG_OPEN}{word}{FLAG_CLOSE}"), true)
        }
    }
}
